//! Заглушки отправки форм. Данные никуда не передаются и не сохраняются.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Perceivers’ Corner: момент матча на разбор
    MomentSubmission,
    /// Collaborate: запрос на сотрудничество
    CollaborationInquiry,
}

impl FormKind {
    pub fn acknowledgement(&self) -> &'static str {
        match self {
            FormKind::MomentSubmission => "Moment Submitted!",
            FormKind::CollaborationInquiry => "Inquiry Sent!",
        }
    }
}

/// Local confirmation shown after a stubbed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement {
    pub form: FormKind,
    pub message: &'static str,
}

pub fn submit(form: FormKind) -> Acknowledgement {
    Acknowledgement {
        form,
        message: form.acknowledgement(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_returns_local_acknowledgement() {
        assert_eq!(
            submit(FormKind::MomentSubmission).message,
            "Moment Submitted!"
        );
        let ack = submit(FormKind::CollaborationInquiry);
        assert_eq!(ack.form, FormKind::CollaborationInquiry);
        assert_eq!(ack.message, "Inquiry Sent!");
    }

    #[test]
    fn test_submit_is_stateless() {
        assert_eq!(
            submit(FormKind::MomentSubmission),
            submit(FormKind::MomentSubmission)
        );
    }
}
