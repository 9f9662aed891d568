//! CPU instruction counting
//!
//! Reports the number of instructions the current process has executed,
//! on hosts that expose a counter. Callers treat `None` as "metric
//! unavailable" and omit the measurement; it is never reported as zero.

/// Instructions executed by this process so far, where the host exposes
/// a counter.
#[cfg(target_os = "macos")]
pub fn executed() -> Option<u64> {
    let mut info: libc::rusage_info_v4 = unsafe { std::mem::zeroed() };
    let result = unsafe {
        libc::proc_pid_rusage(
            std::process::id() as libc::c_int,
            libc::RUSAGE_INFO_V4,
            std::ptr::addr_of_mut!(info).cast(),
        )
    };
    if result == 0 {
        Some(info.ri_instructions)
    } else {
        None
    }
}

/// Instructions executed by this process so far, where the host exposes
/// a counter. This platform does not.
#[cfg(not(target_os = "macos"))]
pub fn executed() -> Option<u64> {
    None
}
