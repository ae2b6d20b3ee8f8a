//! Container header probing for video durations.

use std::path::Path;

/// Extensions of ISO base media files whose `mvhd` box carries a duration.
#[cfg_attr(not(feature = "mp4-duration"), allow(dead_code))]
const ISO_BMFF_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "3gp"];

#[cfg_attr(not(feature = "mp4-duration"), allow(dead_code))]
fn is_iso_bmff(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ISO_BMFF_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Container duration in milliseconds. `None` when the format is not
/// ISO-BMFF, the header cannot be parsed, or it reports zero.
#[cfg(feature = "mp4-duration")]
pub(crate) fn duration_millis(path: &Path, file_len: u64) -> Option<i64> {
    use std::io::BufReader;

    if !is_iso_bmff(path) {
        return None;
    }

    let file = std::fs::File::open(path).ok()?;
    let reader = BufReader::new(file);
    let mp4 = mp4::Mp4Reader::read_header(reader, file_len).ok()?;

    i64::try_from(mp4.duration().as_millis())
        .ok()
        .filter(|millis| *millis > 0)
}

#[cfg(not(feature = "mp4-duration"))]
pub(crate) fn duration_millis(_path: &Path, _file_len: u64) -> Option<i64> {
    None
}
