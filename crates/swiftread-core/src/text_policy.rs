//! Fixed-buffer label formatting for compact progress surfaces.

use core::str;

/// Bytes needed for any `m:ss` label produced by [`clock_label`].
pub const CLOCK_LABEL_BYTES: usize = 14;
/// Bytes needed for any label produced by [`percent_label`].
pub const PERCENT_LABEL_BYTES: usize = 4;

/// Formats whole seconds as `m:ss`; minutes are not wrapped into hours.
pub fn clock_label(seconds: u32, out: &mut [u8; CLOCK_LABEL_BYTES]) -> &str {
    let minutes = seconds / 60;
    let secs = seconds % 60;

    let mut len = write_u32_ascii(minutes, &mut out[..]);
    out[len] = b':';
    len += 1;
    out[len] = b'0' + (secs / 10) as u8;
    out[len + 1] = b'0' + (secs % 10) as u8;
    len += 2;

    str::from_utf8(&out[..len]).unwrap_or("0:00")
}

/// Formats a `0..=100` percentage as `NN%`, saturating above 100.
pub fn percent_label(percent: u8, out: &mut [u8; PERCENT_LABEL_BYTES]) -> &str {
    let mut len = write_u32_ascii(percent.min(100) as u32, &mut out[..]);
    out[len] = b'%';
    len += 1;

    str::from_utf8(&out[..len]).unwrap_or("0%")
}

pub fn write_u32_ascii(mut value: u32, out: &mut [u8]) -> usize {
    if out.is_empty() {
        return 0;
    }

    if value == 0 {
        out[0] = b'0';
        return 1;
    }

    let mut tmp = [0u8; 10];
    let mut n = 0usize;
    while value > 0 && n < tmp.len() {
        tmp[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
    }

    let len = n.min(out.len());
    for i in 0..len {
        out[i] = tmp[n - 1 - i];
    }
    len
}
