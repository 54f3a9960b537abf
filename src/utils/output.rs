use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Writes `path` followed by a newline. On Unix the raw bytes are written so
/// non-UTF-8 paths come out exactly as given.
pub fn write_path_line<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(path.as_os_str().as_bytes())?;
    }
    #[cfg(not(unix))]
    {
        write!(out, "{}", path.display())?;
    }
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_path_line_appends_newline() {
        let mut buf = Vec::new();
        write_path_line(&mut buf, Path::new("../../b/c")).unwrap();
        assert_eq!(buf, b"../../b/c\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_path_line_keeps_non_utf8_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/tmp/caf\xe9");
        let mut buf = Vec::new();
        write_path_line(&mut buf, Path::new(raw)).unwrap();
        assert_eq!(buf, b"/tmp/caf\xe9\n");
    }
}
