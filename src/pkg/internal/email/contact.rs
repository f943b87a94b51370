use std::fmt::{self, Display};

use chrono::Utc;

use super::{send_email, SendEmail};
use crate::pkg::internal::dates;

/// Contact-form submission relayed to the site mailbox.
pub struct ContactTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

impl<'a> Display for ContactTemplate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sent_at = dates::format_display(&Utc::now().naive_utc());
        let html_template = format!(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <meta charset="utf-8">
                <title>Nuevo mensaje de contacto</title>
                <style>
                    body {{
                        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
                        line-height: 1.6;
                        margin: 0;
                        padding: 0;
                        background-color: #f9fafb;
                    }}
                    .container {{
                        max-width: 600px;
                        margin: 0 auto;
                        padding: 20px;
                    }}
                    .card {{
                        padding: 30px;
                        background-color: #ffffff;
                        border-radius: 8px;
                        box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
                    }}
                    .meta {{
                        color: #6b7280;
                        font-size: 13px;
                        margin-bottom: 16px;
                    }}
                    .message {{
                        color: #111827;
                        font-size: 15px;
                        white-space: pre-wrap;
                    }}
                </style>
            </head>
            <body>
                <div class="container">
                    <div class="card">
                        <h2 style="color: #111827; margin: 0;">Nuevo mensaje de contacto</h2>
                        <p class="meta">De {} &lt;{}&gt; el {}</p>
                        <p class="message">{}</p>
                    </div>
                </div>
            </body>
            </html>
            "#,
            self.name, self.email, sent_at, self.message
        );
        write!(f, "{}", html_template)
    }
}

impl<'a> SendEmail for ContactTemplate<'a> {
    fn send(&self, email: &str) -> crate::prelude::Result<()> {
        send_email(
            email,
            &format!("Contacto: mensaje de {}", self.name),
            &format!("{}", &self),
            true,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_carries_sender_details() {
        let body = ContactTemplate {
            name: "Juan",
            email: "juan@example.com",
            message: "Quisiera actualizar mi perfil",
        }
        .to_string();
        assert!(body.contains("juan@example.com"));
        assert!(body.contains("Quisiera actualizar mi perfil"));
    }
}
