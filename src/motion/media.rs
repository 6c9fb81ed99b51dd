use crate::config::{FINE_POINTER_QUERY, REDUCED_MOTION_QUERY};
use crate::error::{SiteError, SiteResult};

pub fn matches(query: &str) -> SiteResult<bool> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    Ok(window
        .match_media(query)?
        .map(|list| list.matches())
        .unwrap_or(false))
}

/// What the visitor's device and settings allow decorative motion to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionPolicy {
    pub reduced_motion: bool,
    pub fine_pointer: bool,
}

impl MotionPolicy {
    pub fn detect() -> Self {
        let reduced_motion = matches(REDUCED_MOTION_QUERY).unwrap_or_else(|err| {
            log::warn!("could not read motion preference: {}", err);
            false
        });
        let fine_pointer = matches(FINE_POINTER_QUERY).unwrap_or_else(|err| {
            log::warn!("could not read pointer capabilities: {}", err);
            false
        });
        let policy = Self {
            reduced_motion,
            fine_pointer,
        };
        log::debug!("motion policy: {:?}", policy);
        policy
    }

    pub fn cursor_enabled(&self) -> bool {
        !self.reduced_motion && self.fine_pointer
    }

    pub fn tilt_enabled(&self) -> bool {
        !self.reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_disables_cursor_and_tilt() {
        let policy = MotionPolicy {
            reduced_motion: true,
            fine_pointer: true,
        };
        assert!(!policy.cursor_enabled());
        assert!(!policy.tilt_enabled());
    }

    #[test]
    fn touch_devices_get_tilt_but_no_cursor() {
        let policy = MotionPolicy {
            reduced_motion: false,
            fine_pointer: false,
        };
        assert!(!policy.cursor_enabled());
        assert!(policy.tilt_enabled());
    }

    #[test]
    fn desktop_gets_everything() {
        let policy = MotionPolicy {
            reduced_motion: false,
            fine_pointer: true,
        };
        assert!(policy.cursor_enabled());
        assert!(policy.tilt_enabled());
    }
}
