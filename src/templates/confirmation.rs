//! Acknowledgement sent back to the person who submitted the form.

use super::{EmailTemplates, RenderedEmail};
use crate::domain::ContactSubmission;
use maud::{html, PreEscaped, DOCTYPE};

const STYLE: &str = "\
body { margin: 0; padding: 0; font-family: Arial, Helvetica, sans-serif; line-height: 1.6; background-color: #1A1A1A; color: #F0F0F0; }
.email-container { max-width: 600px; margin: 0 auto; background-color: #1A1A1A; border: 1px solid #121820; border-radius: 8px; overflow: hidden; }
.header { background-color: #121212; padding: 30px 20px; text-align: center; border-bottom: 1px solid #2A4165; }
.logo { font-size: 24px; font-weight: bold; color: #F0F0F0; letter-spacing: 2px; }
.content { padding: 30px 20px; }
h1 { color: #FF7D3A; margin-top: 0; font-size: 24px; margin-bottom: 20px; }
p { margin-bottom: 20px; color: #B0B0B0; }
.highlight { color: #FF7D3A; font-weight: bold; }
.card { background-color: #121820; border-radius: 8px; padding: 20px; margin: 20px 0; border: 1px solid rgba(42, 65, 101, 0.3); }
.button-container { text-align: center; margin: 30px 0; }
.button { display: inline-block; background-color: #FF7D3A; color: #FFFFFF; padding: 12px 24px; text-decoration: none; border-radius: 4px; font-weight: bold; }
.footer { background-color: #121212; padding: 20px; text-align: center; border-top: 1px solid #2A4165; }
.footer p { margin: 5px 0; font-size: 12px; }
@media only screen and (max-width: 600px) { .email-container { width: 100%; border-radius: 0; } .content { padding: 20px 15px; } }";

impl EmailTemplates {
    /// Render the confirmation for the submitter.
    ///
    /// The HTML version only acknowledges receipt; the text version also
    /// quotes the message so the submitter has a copy.
    pub fn render_confirmation_message(&self, submission: &ContactSubmission) -> RenderedEmail {
        RenderedEmail {
            subject: format!("Vielen Dank für deine Nachricht | {}", self.brand_name()),
            html: self.confirmation_html(submission),
            text: self.confirmation_text(submission),
        }
    }

    fn confirmation_html(&self, submission: &ContactSubmission) -> String {
        let markup = html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { "Vielen Dank für deine Nachricht" }
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    div class="email-container" {
                        div class="header" {
                            div class="logo" { (self.brand_name()) }
                        }

                        div class="content" {
                            h1 { "Vielen Dank für deine Nachricht, " (submission.name()) "!" }

                            p { "Wir haben deine Anfrage erhalten und werden uns in Kürze bei dir melden." }

                            div class="card" {
                                h3 { "Was passiert als Nächstes?" }
                                p {
                                    "Unser Team wird deine Anfrage prüfen und sich innerhalb von "
                                    span class="highlight" { "24 Stunden" }
                                    " bei dir melden."
                                }
                                @if submission.request_callback() {
                                    p { "Du hast um einen Rückruf gebeten. Wir melden uns telefonisch bei dir." }
                                }
                            }

                            div class="button-container" {
                                a href=(self.site_url()) class="button" { "WEBSITE BESUCHEN" }
                            }

                            p {
                                "Mit kreativen Grüßen,"
                                br;
                                span class="highlight" { "Dein " (self.brand_name()) " Team" }
                            }
                        }

                        div class="footer" {
                            p { "© " (self.year()) " " (self.brand_name()) ". Alle Rechte vorbehalten." }
                            p { "Diese E-Mail wurde automatisch gesendet. Bitte antworte nicht auf diese E-Mail." }
                        }
                    }
                }
            }
        };
        markup.into_string()
    }

    fn confirmation_text(&self, submission: &ContactSubmission) -> String {
        format!(
            "Vielen Dank für deine Nachricht, {name}!\n\
             \n\
             Wir haben deine Anfrage erhalten und werden uns in Kürze bei dir melden.\n\
             \n\
             Deine Nachricht:\n\
             {message}\n\
             \n\
             Mit freundlichen Grüßen,\n\
             Dein {brand} Team\n\
             © {year} {brand}",
            name = submission.name(),
            message = submission.message(),
            brand = self.brand_name(),
            year = self.year(),
        )
    }
}
