//! 时间工具函数
//!
//! "今天" 统一取服务器本地时区的日期，由 handler 层传入校验函数。

use chrono::{Local, NaiveDate};

/// 服务器本地时区的当前日期
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 日期是否晚于 `today`
pub fn is_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}
