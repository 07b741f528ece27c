//! Transient success/error notices.

use serde::Serialize;

pub const CREATED_MESSAGE: &str = "Tópico criado com sucesso!";
pub const FAILED_MESSAGE: &str = "Erro ao criar tópico.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Notice {
    Success { title: String, detail: String },
    Error { title: String, detail: String },
}

/// Surface able to show a [`Notice`] to the user.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices in order. Handy for headless runs and tests.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
