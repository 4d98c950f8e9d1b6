//! Canonical text conversion for typed header values.
//!
//! Every non-text value stored in [`Headers`](super::Headers) goes through
//! [`ToHeaderText`] first, so the collection only ever holds text and encoding stays
//! deterministic.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use httpdate::HttpDate;

/// Last second an IMF-fixdate can express: `Fri, 31 Dec 9999 23:59:59 GMT`.
const MAX_HTTP_DATE_SECS: u64 = 253_402_300_799;

/// Conversion of a typed value into its canonical header text.
pub trait ToHeaderText {
    fn to_header_text(&self) -> String;
}

macro_rules! display_header_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToHeaderText for $ty {
                #[inline]
                fn to_header_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_header_text!(bool, char, i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64);

/// Timestamps are written as IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
///
/// Times before the unix epoch or after the year 9999 are clamped into range.
impl ToHeaderText for SystemTime {
    fn to_header_text(&self) -> String {
        HttpTimestamp::from(*self).to_header_text()
    }
}

impl ToHeaderText for HttpDate {
    fn to_header_text(&self) -> String {
        self.to_string()
    }
}

impl<T: ToHeaderText + ?Sized> ToHeaderText for &T {
    #[inline]
    fn to_header_text(&self) -> String {
        (**self).to_header_text()
    }
}

/// A point in time that is always representable as an HTTP date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HttpTimestamp(SystemTime);

impl HttpTimestamp {
    /// Creates a timestamp from milliseconds since the unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        let time = u64::try_from(millis)
            .ok()
            .and_then(|millis| UNIX_EPOCH.checked_add(Duration::from_millis(millis)))
            .unwrap_or_else(|| if millis < 0 { UNIX_EPOCH } else { max_http_time() });
        Self::from(time)
    }

    pub fn as_system_time(&self) -> SystemTime {
        self.0
    }
}

impl From<SystemTime> for HttpTimestamp {
    fn from(time: SystemTime) -> Self {
        let max = max_http_time();
        if time < UNIX_EPOCH {
            Self(UNIX_EPOCH)
        } else if time > max {
            Self(max)
        } else {
            Self(time)
        }
    }
}

impl ToHeaderText for HttpTimestamp {
    fn to_header_text(&self) -> String {
        httpdate::fmt_http_date(self.0)
    }
}

fn max_http_time() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(MAX_HTTP_DATE_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives() {
        assert_eq!(true.to_header_text(), "true");
        assert_eq!(false.to_header_text(), "false");
        assert_eq!(b'7'.to_header_text(), "55");
        assert_eq!('x'.to_header_text(), "x");
        assert_eq!((-12_i16).to_header_text(), "-12");
        assert_eq!(1024_i32.to_header_text(), "1024");
        assert_eq!(i64::MAX.to_header_text(), "9223372036854775807");
        assert_eq!(1.5_f32.to_header_text(), "1.5");
        assert_eq!(0.25_f64.to_header_text(), "0.25");
    }

    #[test]
    fn timestamp_from_millis() {
        let timestamp = HttpTimestamp::from_millis(784_111_777_000);
        assert_eq!(timestamp.to_header_text(), "Sun, 06 Nov 1994 08:49:37 GMT");
        assert_eq!(timestamp.as_system_time(), UNIX_EPOCH + Duration::from_secs(784_111_777));
    }

    #[test]
    fn system_time() {
        let time = UNIX_EPOCH + Duration::from_secs(784_111_777);
        assert_eq!(time.to_header_text(), "Sun, 06 Nov 1994 08:49:37 GMT");
        assert_eq!(HttpDate::from(time).to_header_text(), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn timestamp_out_of_range_is_clamped() {
        assert_eq!(HttpTimestamp::from_millis(-1).to_header_text(), "Thu, 01 Jan 1970 00:00:00 GMT");
        assert_eq!(HttpTimestamp::from_millis(i64::MAX).to_header_text(), "Fri, 31 Dec 9999 23:59:59 GMT");
    }
}
