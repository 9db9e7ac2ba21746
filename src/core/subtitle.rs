//! Subtitle filename parsing and classification.
//!
//! Sonarr and Radarr occasionally rename an original/forced subtitle pair
//! into numbered track files (`<stem>.1.en.srt` + `<stem>.2.en.srt`). Bazarr
//! and tdarr on the other hand emit the three-letter ISO language code
//! (`.eng.srt`). This module parses those shapes and decides, from file
//! sizes alone, whether a numbered "forced" track really is one.

use std::path::{Path, PathBuf};

/// A "forced" subtitle larger than this fraction of the original is
/// considered too big to be a forced track.
pub const FORCED_SIZE_RATIO: f64 = 0.4;

/// Language tags the renaming tools are known to produce for English.
pub const SUBTITLE_LANGS: [&str; 2] = ["en", "eng"];

/// The three-letter ISO code every English subtitle is normalized to.
pub const CANONICAL_LANG: &str = "eng";

/// A parsed subtitle file path.
///
/// `base` is the path up to (but excluding) the subtitle suffix, so
/// `Show.S01E01.1.en.srt` parses to base `Show.S01E01`, track `1`,
/// language `en`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleFile {
    /// Path without the subtitle suffix.
    pub base: PathBuf,

    /// Numbered track inserted by the renamer (1 = original, 2 = forced).
    pub track: Option<u8>,

    /// Language tag as found on disk.
    pub lang: String,

    /// Whether the filename carries the `.forced` marker.
    pub forced: bool,
}

impl SubtitleFile {
    /// Parse a path as an English subtitle file.
    ///
    /// Returns `None` for anything that is not an `.srt` file with a
    /// recognized language tag.
    pub fn parse(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let rest = name.strip_suffix(".srt")?;

        let (rest, forced) = match rest.strip_suffix(".forced") {
            Some(stripped) => (stripped, true),
            None => (rest, false),
        };

        let dot = rest.rfind('.')?;
        let lang = &rest[dot + 1..];
        if !SUBTITLE_LANGS.contains(&lang) {
            return None;
        }
        let rest = &rest[..dot];

        let (stem, track) = match rest.rfind('.') {
            Some(dot) => {
                let tail = &rest[dot + 1..];
                if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
                    // A digit run that overflows u8 stays part of the stem,
                    // so the suffix round-trips unchanged.
                    match tail.parse::<u8>() {
                        Ok(track) => (&rest[..dot], Some(track)),
                        Err(_) => (rest, None),
                    }
                } else {
                    (rest, None)
                }
            }
            None => (rest, None),
        };

        if stem.is_empty() {
            return None;
        }

        Some(SubtitleFile {
            base: path.with_file_name(stem),
            track,
            lang: lang.to_string(),
            forced,
        })
    }

    /// The normalized path for this subtitle: `<base>.eng.srt`.
    pub fn canonical(&self) -> PathBuf {
        self.with_suffix(&format!(".{CANONICAL_LANG}.srt"))
    }

    /// The normalized forced path for this subtitle: `<base>.eng.forced.srt`.
    pub fn canonical_forced(&self) -> PathBuf {
        self.with_suffix(&format!(".{CANONICAL_LANG}.forced.srt"))
    }

    /// The numbered sibling with the same stem and language,
    /// e.g. track 2 of `Show.1.en.srt` is `Show.2.en.srt`.
    pub fn sibling(&self, track: u8) -> PathBuf {
        self.with_suffix(&format!(".{}.{}.srt", track, self.lang))
    }

    fn with_suffix(&self, suffix: &str) -> PathBuf {
        let mut s = self.base.clone().into_os_string();
        s.push(suffix);
        PathBuf::from(s)
    }
}

/// Verdict on a numbered track-2 subtitle, judged by size against the
/// track-1 original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcedVerdict {
    /// Same size or larger than the original: a duplicate copy, delete it.
    Duplicate,

    /// Too large to plausibly be a forced track; leave it for manual review.
    Suspicious,

    /// Small enough to be a genuine forced track.
    Forced,
}

/// Classify a supposed forced subtitle by comparing file sizes.
pub fn classify_forced(orig_size: u64, forced_size: u64) -> ForcedVerdict {
    if forced_size >= orig_size {
        ForcedVerdict::Duplicate
    } else if forced_size as f64 > orig_size as f64 * FORCED_SIZE_RATIO {
        ForcedVerdict::Suspicious
    } else {
        ForcedVerdict::Forced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbered_track() {
        let sub = SubtitleFile::parse(Path::new("/media/tv/Show.S01E01.1.en.srt")).unwrap();
        assert_eq!(sub.base, PathBuf::from("/media/tv/Show.S01E01"));
        assert_eq!(sub.track, Some(1));
        assert_eq!(sub.lang, "en");
        assert!(!sub.forced);
    }

    #[test]
    fn test_parse_plain_lang() {
        let sub = SubtitleFile::parse(Path::new("Movie (2020).eng.srt")).unwrap();
        assert_eq!(sub.base, PathBuf::from("Movie (2020)"));
        assert_eq!(sub.track, None);
        assert_eq!(sub.lang, "eng");
        assert!(!sub.forced);
    }

    #[test]
    fn test_parse_forced_marker() {
        let sub = SubtitleFile::parse(Path::new("Movie.eng.forced.srt")).unwrap();
        assert_eq!(sub.base, PathBuf::from("Movie"));
        assert!(sub.forced);
        assert_eq!(sub.lang, "eng");
    }

    #[test]
    fn test_parse_rejects_other_languages() {
        assert!(SubtitleFile::parse(Path::new("Movie.fr.srt")).is_none());
        assert!(SubtitleFile::parse(Path::new("Movie.de.srt")).is_none());
    }

    #[test]
    fn test_parse_rejects_non_srt() {
        assert!(SubtitleFile::parse(Path::new("Movie.en.sub")).is_none());
        assert!(SubtitleFile::parse(Path::new("Movie.mkv")).is_none());
        assert!(SubtitleFile::parse(Path::new(".en.srt")).is_none());
    }

    #[test]
    fn test_parse_multi_digit_track() {
        let sub = SubtitleFile::parse(Path::new("Movie.10.en.srt")).unwrap();
        assert_eq!(sub.track, Some(10));
    }

    #[test]
    fn test_oversized_track_number_stays_in_stem() {
        let sub = SubtitleFile::parse(Path::new("Movie.300.en.srt")).unwrap();
        assert_eq!(sub.base, PathBuf::from("Movie.300"));
        assert_eq!(sub.track, None);
        assert_eq!(sub.canonical(), PathBuf::from("Movie.300.eng.srt"));
    }

    #[test]
    fn test_stem_with_dots() {
        let sub = SubtitleFile::parse(Path::new("Movie.Name.2020.1080p.en.srt")).unwrap();
        assert_eq!(sub.base, PathBuf::from("Movie.Name.2020.1080p"));
        assert_eq!(sub.track, None);
    }

    #[test]
    fn test_canonical_paths() {
        let sub = SubtitleFile::parse(Path::new("/m/Show.1.en.srt")).unwrap();
        assert_eq!(sub.canonical(), PathBuf::from("/m/Show.eng.srt"));
        assert_eq!(
            sub.canonical_forced(),
            PathBuf::from("/m/Show.eng.forced.srt")
        );
        assert_eq!(sub.sibling(2), PathBuf::from("/m/Show.2.en.srt"));
    }

    #[test]
    fn test_classify_duplicate() {
        assert_eq!(classify_forced(100, 100), ForcedVerdict::Duplicate);
        assert_eq!(classify_forced(100, 150), ForcedVerdict::Duplicate);
    }

    #[test]
    fn test_classify_suspicious() {
        assert_eq!(classify_forced(100, 99), ForcedVerdict::Suspicious);
        assert_eq!(classify_forced(100, 41), ForcedVerdict::Suspicious);
    }

    #[test]
    fn test_classify_forced() {
        assert_eq!(classify_forced(100, 40), ForcedVerdict::Forced);
        assert_eq!(classify_forced(100, 5), ForcedVerdict::Forced);
        assert_eq!(classify_forced(100, 0), ForcedVerdict::Forced);
    }
}
