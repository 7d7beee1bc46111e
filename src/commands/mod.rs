pub mod card;
pub mod feed;
pub mod init;

use chrono::NaiveDate;

pub(crate) fn today_local() -> NaiveDate {
    chrono::Local::now().date_naive()
}
