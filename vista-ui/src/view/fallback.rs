//! Fixed fragments shown instead of view content: loading, error, notice.

use super::icons::IconSet;
use crate::node::escape;

pub fn spinner_markup(icons: &IconSet) -> String {
    format!(
        r#"
<div class="spinner">
  <svg>
    <use href="{}"></use>
  </svg>
</div>
"#,
        escape(&icons.href("loader"))
    )
}

pub fn error_markup(icons: &IconSet, message: &str) -> String {
    notice_markup("error", &icons.href("alert-triangle"), message)
}

pub fn message_markup(icons: &IconSet, message: &str) -> String {
    notice_markup("message", &icons.href("smile"), message)
}

fn notice_markup(class: &str, icon_href: &str, message: &str) -> String {
    format!(
        r#"
<div class="{class}">
  <div>
    <svg>
      <use href="{}"></use>
    </svg>
  </div>
  <p>{}</p>
</div>
"#,
        escape(icon_href),
        escape(message)
    )
}
