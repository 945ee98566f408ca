use std::io::{Error, Result};

/// Local hostname, as `gethostname(2)` reports it.
#[cfg(unix)]
pub fn get() -> Result<String> {
    // HOST_NAME_MAX is 64 on Linux, 255 is the POSIX ceiling.
    let mut buf = [0u8; 256];

    // SAFETY: the pointer and length describe a writable buffer owned by
    // this frame.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast::<libc::c_char>(), buf.len()) };
    if rc != 0 {
        return Err(Error::last_os_error());
    }

    let Some(end) = buf.iter().position(|&b| b == 0) else {
        return Err(Error::other("hostname is not NUL terminated"));
    };

    Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
}
