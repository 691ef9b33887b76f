//! yt-dlp command assembly.
//!
//! Argument order is fixed: base audio-extraction flags, toggles, metadata
//! flags, the user's extra arguments, then the URL last.

use std::path::Path;

use crate::config::TcdlConfig;
use crate::events::{EventSink, ResolutionEvent};

/// Postprocessor scope for the album tag: only the audio extraction ffmpeg call.
const EXTRACT_AUDIO_PP: &str = "ffmpeg-FFmpegExtractAudio";

const ADD_METADATA: &str = "--add-metadata";

/// Quotes `s` as a single POSIX shell word (yt-dlp splits postprocessor args
/// with shell rules).
pub fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    let safe = s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r#"'"'"'"#))
    }
}

/// Album and filename flags derived from the configuration.
///
/// With album embedding on and a clean `album_name`, the tag is passed straight
/// to the audio-extraction ffmpeg call. Without a name, yt-dlp is asked to
/// map its own `playlist_title` to the album field instead.
pub fn metadata_flags(
    cfg: &TcdlConfig,
    album_name: Option<&str>,
    sink: &mut dyn EventSink,
) -> Vec<String> {
    let mut flags = Vec::new();

    if cfg.embed_collection_as_album {
        match album_name.filter(|name| !name.is_empty()) {
            Some(name) => {
                let album_kv = shell_quote(&format!("album={name}"));
                flags.push("--postprocessor-args".to_string());
                flags.push(format!("{EXTRACT_AUDIO_PP}:-metadata {album_kv}"));
            }
            None => {
                sink.emit(ResolutionEvent::AlbumTagFallback);
                flags.push("--parse-metadata".to_string());
                flags.push("playlist_title:%(album)s".to_string());
                if !cfg.extra_yt_dlp_args.iter().any(|a| a == ADD_METADATA) {
                    flags.push(ADD_METADATA.to_string());
                }
            }
        }
    }

    if cfg.windows_safe_filenames {
        flags.push("--windows-filenames".to_string());
    }

    flags
}

/// Full argument vector (program first) for downloading `url` into `out_dir`.
pub fn build_command(
    url: &str,
    out_dir: &Path,
    archive: &Path,
    cfg: &TcdlConfig,
    album_name: Option<&str>,
    sink: &mut dyn EventSink,
) -> Vec<String> {
    let mut cmd = vec![
        cfg.program().to_string(),
        "--format".to_string(),
        "bestaudio/best".to_string(),
        "--extract-audio".to_string(),
        "--audio-format".to_string(),
        cfg.audio_format.clone(),
        "--audio-quality".to_string(),
        cfg.audio_quality.to_string(),
        "--output".to_string(),
        out_dir.join(&cfg.output_template).to_string_lossy().into_owned(),
        "--download-archive".to_string(),
        archive.to_string_lossy().into_owned(),
        "--console-title".to_string(),
    ];
    if cfg.no_overwrites {
        cmd.push("--no-overwrites".to_string());
    }
    if cfg.ignore_errors {
        cmd.push("--ignore-errors".to_string());
    }

    cmd.extend(metadata_flags(cfg, album_name, sink));
    cmd.extend(cfg.extra_yt_dlp_args.iter().cloned());
    cmd.push(url.to_string());
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const URL: &str = "https://www.tiktok.com/@dj/collection/Mix-7543443541872102166";

    fn cfg() -> TcdlConfig {
        TcdlConfig {
            no_overwrites: false,
            ignore_errors: false,
            embed_collection_as_album: false,
            windows_safe_filenames: false,
            ..TcdlConfig::default()
        }
    }

    fn count(cmd: &[String], flag: &str) -> usize {
        cmd.iter().filter(|a| *a == flag).count()
    }

    #[test]
    fn shell_quote_cases() {
        assert_eq!(shell_quote("album=Mix"), "album=Mix");
        assert_eq!(shell_quote("album=Late Night"), "'album=Late Night'");
        assert_eq!(shell_quote("it's"), r#"'it'"'"'s'"#);
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("夜"), "'夜'");
    }

    #[test]
    fn base_command_order() {
        let out = PathBuf::from("/music/Mix");
        let archive = out.join(".yt-dlp-archive-abc.txt");
        let cmd = build_command(URL, &out, &archive, &cfg(), None, &mut ());
        let expected_output = out.join("%(title)s [%(id)s].%(ext)s");
        assert_eq!(
            cmd,
            vec![
                "yt-dlp".to_string(),
                "--format".to_string(),
                "bestaudio/best".to_string(),
                "--extract-audio".to_string(),
                "--audio-format".to_string(),
                "mp3".to_string(),
                "--audio-quality".to_string(),
                "0".to_string(),
                "--output".to_string(),
                expected_output.to_string_lossy().into_owned(),
                "--download-archive".to_string(),
                archive.to_string_lossy().into_owned(),
                "--console-title".to_string(),
                URL.to_string(),
            ]
        );
    }

    #[test]
    fn toggles_and_extra_args() {
        let cfg = TcdlConfig {
            no_overwrites: true,
            ignore_errors: true,
            windows_safe_filenames: true,
            extra_yt_dlp_args: vec!["--sleep-interval".to_string(), "2".to_string()],
            ..cfg()
        };
        let cmd = build_command(URL, Path::new("/m"), Path::new("/m/a.txt"), &cfg, None, &mut ());
        let tail: Vec<&str> = cmd[13..].iter().map(String::as_str).collect();
        assert_eq!(
            tail,
            vec![
                "--no-overwrites",
                "--ignore-errors",
                "--windows-filenames",
                "--sleep-interval",
                "2",
                URL
            ]
        );
    }

    #[test]
    fn album_tag_scoped_to_audio_extraction() {
        let cfg = TcdlConfig {
            embed_collection_as_album: true,
            ..cfg()
        };
        let flags = metadata_flags(&cfg, Some("Late Night"), &mut ());
        assert_eq!(
            flags,
            vec![
                "--postprocessor-args",
                "ffmpeg-FFmpegExtractAudio:-metadata 'album=Late Night'"
            ]
        );
    }

    #[test]
    fn album_fallback_maps_playlist_title() {
        let cfg = TcdlConfig {
            embed_collection_as_album: true,
            ..cfg()
        };
        let mut events: Vec<ResolutionEvent> = Vec::new();
        let flags = metadata_flags(&cfg, None, &mut events);
        assert_eq!(
            flags,
            vec!["--parse-metadata", "playlist_title:%(album)s", "--add-metadata"]
        );
        assert_eq!(events, vec![ResolutionEvent::AlbumTagFallback]);
    }

    #[test]
    fn album_fallback_respects_user_add_metadata() {
        let cfg = TcdlConfig {
            embed_collection_as_album: true,
            extra_yt_dlp_args: vec!["--add-metadata".to_string()],
            ..cfg()
        };
        let cmd = build_command(URL, Path::new("/m"), Path::new("/m/a.txt"), &cfg, None, &mut ());
        assert_eq!(count(&cmd, "--add-metadata"), 1);
        assert_eq!(count(&cmd, "--parse-metadata"), 1);
        assert_eq!(cmd.last().map(String::as_str), Some(URL));
    }

    #[test]
    fn no_album_flags_when_embedding_off() {
        let cmd = build_command(URL, Path::new("/m"), Path::new("/m/a.txt"), &cfg(), Some("Mix"), &mut ());
        assert_eq!(count(&cmd, "--postprocessor-args"), 0);
        assert_eq!(count(&cmd, "--parse-metadata"), 0);
    }

    #[test]
    fn configured_program_comes_first() {
        let cfg = TcdlConfig {
            yt_dlp_path: Some("/opt/bin/yt-dlp".to_string()),
            ..cfg()
        };
        let cmd = build_command(URL, Path::new("/m"), Path::new("/m/a.txt"), &cfg, None, &mut ());
        assert_eq!(cmd[0], "/opt/bin/yt-dlp");
    }
}
