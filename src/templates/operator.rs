//! Notification sent to the site operators for every submission.

use super::{callback_label, EmailTemplates, RenderedEmail};
use crate::domain::ContactSubmission;
use maud::{html, PreEscaped, DOCTYPE};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
.container { max-width: 600px; margin: 0 auto; padding: 20px; }
h1 { color: #FF7D3A; }
h2 { color: #FF7D3A; margin-top: 20px; }
.message { background-color: #f5f5f5; padding: 15px; border-radius: 6px; }
.footer { margin-top: 30px; font-size: 12px; color: #666; }";

impl EmailTemplates {
    /// Render the operator notification.
    ///
    /// The subject carries the submitter's name. The message keeps its line
    /// breaks: as `<br>` in HTML and verbatim in the text body.
    pub fn render_operator_notification(&self, submission: &ContactSubmission) -> RenderedEmail {
        RenderedEmail {
            subject: format!("Neue Kontaktanfrage von {}", submission.name()),
            html: self.operator_html(submission),
            text: self.operator_text(submission),
        }
    }

    fn operator_html(&self, submission: &ContactSubmission) -> String {
        let markup = html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { "Neue Kontaktanfrage" }
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    div class="container" {
                        h1 { "Neue Kontaktanfrage" }
                        p { "Von deinem " (self.brand_name()) " Website-Kontaktformular" }

                        div {
                            h2 { "Kontaktdetails:" }
                            p { strong { "Name:" } " " (submission.name()) }
                            p { strong { "E-Mail:" } " " (submission.email().as_str()) }
                            @if let Some(phone) = submission.phone() {
                                p { strong { "Telefon:" } " " (phone) }
                            }
                            p { strong { "Rückruf:" } " " (callback_label(submission.request_callback())) }
                        }

                        div {
                            h2 { "Nachricht:" }
                            div class="message" {
                                @for (i, line) in submission.message().lines().enumerate() {
                                    @if i > 0 { br; }
                                    (line)
                                }
                            }
                        }

                        div class="footer" {
                            p { "Diese E-Mail wurde automatisch vom Kontaktformular deiner Website gesendet." }
                            p { "© " (self.year()) " " (self.brand_name()) }
                        }
                    }
                }
            }
        };
        markup.into_string()
    }

    fn operator_text(&self, submission: &ContactSubmission) -> String {
        let phone = submission
            .phone()
            .map(|phone| format!("Telefon: {}\n", phone))
            .unwrap_or_default();

        format!(
            "Neue Kontaktanfrage von {name}\n\
             \n\
             Kontaktdetails:\n\
             Name: {name}\n\
             E-Mail: {email}\n\
             {phone}\
             Rückruf: {callback}\n\
             \n\
             Nachricht:\n\
             {message}\n\
             \n\
             Diese E-Mail wurde automatisch vom Kontaktformular deiner Website gesendet.\n\
             © {year} {brand}",
            name = submission.name(),
            email = submission.email(),
            phone = phone,
            callback = callback_label(submission.request_callback()),
            message = submission.message(),
            year = self.year(),
            brand = self.brand_name(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates() -> EmailTemplates {
        EmailTemplates::with_year("ADAN MEDIA", "https://adanmedia.de", 2025)
    }

    fn submission(phone: &str, message: &str, callback: bool) -> ContactSubmission {
        ContactSubmission::new("Max Mustermann", "max@example.com", phone, message, callback)
            .unwrap()
    }

    #[test]
    fn test_subject_contains_name() {
        let email = templates().render_operator_notification(&submission("", "Hallo", false));
        assert_eq!(email.subject, "Neue Kontaktanfrage von Max Mustermann");
    }

    #[test]
    fn test_subject_stays_on_one_line() {
        let submission = ContactSubmission::new(
            "Max\r\nBcc: x@evil.com",
            "max@example.com",
            "",
            "Hallo",
            false,
        )
        .unwrap();
        let email = templates().render_operator_notification(&submission);

        assert!(!email.subject.contains('\r'));
        assert!(!email.subject.contains('\n'));
        assert_eq!(email.subject, "Neue Kontaktanfrage von Max Bcc: x@evil.com");
    }

    #[test]
    fn test_text_body_layout() {
        let email = templates()
            .render_operator_notification(&submission("0221 123456", "Hallo", true));
        assert_eq!(
            email.text,
            "Neue Kontaktanfrage von Max Mustermann\n\nKontaktdetails:\nName: Max Mustermann\n\
             E-Mail: max@example.com\nTelefon: 0221 123456\nRückruf: Ja, bitte zurückrufen\n\n\
             Nachricht:\nHallo\n\nDiese E-Mail wurde automatisch vom Kontaktformular deiner \
             Website gesendet.\n© 2025 ADAN MEDIA"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let templates = templates();
        let submission = submission("+49 170 1234567", "Zeile 1\nZeile 2", true);
        let first = templates.render_operator_notification(&submission);
        let second = templates.render_operator_notification(&submission);
        assert_eq!(first, second);
    }

    #[test]
    fn test_message_newlines_become_br() {
        let email =
            templates().render_operator_notification(&submission("", "Zeile 1\nZeile 2", false));
        assert!(email.html.contains("Zeile 1<br>Zeile 2"));
        assert!(email.text.contains("Nachricht:\nZeile 1\nZeile 2\n"));
    }

    #[test]
    fn test_user_input_is_escaped_in_html() {
        let submission = ContactSubmission::new(
            "<b>Max</b>",
            "max@example.com",
            "",
            "<script>alert(1)</script> & co",
            false,
        )
        .unwrap();
        let email = templates().render_operator_notification(&submission);

        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"));
        assert!(email.html.contains("&lt;b&gt;Max&lt;/b&gt;"));
        // Plain text is not HTML and stays verbatim.
        assert!(email.text.contains("<script>alert(1)</script> & co"));
    }

    #[test]
    fn test_phone_line_only_when_present() {
        let without = templates().render_operator_notification(&submission("", "Hallo", false));
        assert!(!without.html.contains("Telefon:"));
        assert!(!without.text.contains("Telefon:"));

        let with =
            templates().render_operator_notification(&submission("0221 123456", "Hallo", false));
        assert!(with.html.contains("0221 123456"));
        assert!(with.text.contains("Telefon: 0221 123456"));
    }

    #[test]
    fn test_callback_flag_is_human_readable() {
        let yes = templates().render_operator_notification(&submission("", "Hallo", true));
        assert!(yes.text.contains("Rückruf: Ja, bitte zurückrufen"));

        let no = templates().render_operator_notification(&submission("", "Hallo", false));
        assert!(no.text.contains("Rückruf: Nicht erforderlich"));
    }

    #[test]
    fn test_footer_uses_configured_year_and_brand() {
        let email = templates().render_operator_notification(&submission("", "Hallo", false));
        assert!(email.text.ends_with("© 2025 ADAN MEDIA"));
        assert!(email.html.starts_with("<!DOCTYPE html>"));
    }
}
