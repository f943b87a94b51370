use std::fmt::{self, Display};

use super::{send_email, SendEmail};

pub struct TempPasswordTemplate<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

impl<'a> Display for TempPasswordTemplate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html_template = format!(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1.0">
                <title>Contraseña temporal</title>
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
                    .password-container {{
                        text-align: center;
                        margin: 40px 0;
                        padding: 30px;
                        background-color: #ffffff;
                        border-radius: 8px;
                        box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
                    }}
                    .temp-password {{
                        font-size: 28px;
                        font-weight: bold;
                        letter-spacing: 3px;
                        color: #1d4ed8;
                        margin: 20px 0;
                    }}
                    .message {{
                        color: #4b5563;
                        font-size: 14px;
                        margin: 20px 0;
                    }}
                    .warning {{
                        color: #dc2626;
                        font-size: 12px;
                        margin-top: 20px;
                    }}
                </style>
            </head>
            <body>
                <div class="container">
                    <div class="password-container">
                        <h2 style="color: #111827; margin: 0;">Hola {}, esta es tu contraseña temporal</h2>
                        <div class="temp-password">{}</div>
                        <p class="message">
                            Úsala para iniciar sesión y el sistema te pedirá elegir una nueva.<br>
                            Si no solicitaste este cambio, puedes ignorar este correo.
                        </p>
                        <p class="warning">
                            ⚠️ No compartas esta contraseña con nadie.<br>
                            Nuestro equipo nunca te la pedirá.
                        </p>
                    </div>
                </div>
            </body>
            </html>
            "#,
            self.name, self.password
        );
        write!(f, "{}", html_template)
    }
}

impl<'a> SendEmail for TempPasswordTemplate<'a> {
    fn send(&self, email: &str) -> crate::prelude::Result<()> {
        send_email(
            email,
            "Tu contraseña temporal de Alumni",
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
    fn test_template_contains_password() {
        let body = TempPasswordTemplate {
            name: "María",
            password: "Xy7pQ2mA9z",
        }
        .to_string();
        assert!(body.contains("Xy7pQ2mA9z"));
        assert!(body.contains("María"));
    }
}
