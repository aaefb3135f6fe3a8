//! Letter numbers: `NNNN/<token>/<year>`.
//!
//! `NNNN` is a random serial in 1000..=9999. Serials are not tracked across
//! sessions, so two notices can share a number.

use rand::Rng;

use crate::locale::{CONTEMPT_TOKEN, WRIT_TOKEN};
use crate::model::NoticeType;

pub const SERIAL_MIN: u16 = 1000;
pub const SERIAL_MAX: u16 = 9999;

/// Draw a four-digit serial.
pub fn draw_serial<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.gen_range(SERIAL_MIN..=SERIAL_MAX)
}

/// Format a letter number for `notice_type`.
pub fn letter_number(notice_type: NoticeType, serial: u16, year: i32) -> String {
    let token = match notice_type {
        NoticeType::Contempt => CONTEMPT_TOKEN,
        NoticeType::Regular | NoticeType::Custom => WRIT_TOKEN,
    };
    format!("{serial}/{token}/{year}")
}
