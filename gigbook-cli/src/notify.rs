//! Best-effort desktop notifications.
//!
//! Failures are ignored: a missing notification daemon must never break a
//! roster operation.

use notify_rust::Notification;

pub fn show(title: &str, body: &str) {
    let _ = Notification::new().summary(title).body(body).show();
}
