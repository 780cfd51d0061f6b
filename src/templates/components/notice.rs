use crate::state::{Notice, NoticeLevel};
use maud::{html, Markup};

pub fn notice_banner(notice: &Notice) -> Markup {
    let class = match notice.level {
        NoticeLevel::Info => "notice notice-info",
        NoticeLevel::Error => "notice notice-error",
    };

    html! {
        div class=(class) role="alert" { (notice.text) }
    }
}
