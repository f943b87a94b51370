use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

pub mod contact;
pub mod reset;

use crate::{conf::settings, prelude::Result};

pub trait SendEmail {
    fn send(&self, email: &str) -> Result<()>;
}

/// Delivery happens off the request path: SMTP is slow and a lost mail is
/// not worth failing the request over.
pub fn send_email(email: &str, subject: &str, body: &str, is_html: bool) -> Result<()> {
    let (name, _) = email.split_once('@').unwrap_or(("unknown", ""));
    let name = name.to_string();
    let email = email.to_string();
    let subject = subject.to_string();
    let body = body.to_string();
    tracing::debug!("sending email to {}", &email);
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || {
            let content_type = if is_html {
                ContentType::TEXT_HTML
            } else {
                ContentType::TEXT_PLAIN
            };

            let email = Message::builder()
                .from(
                    format!("{} <{}>", &settings.service_name, &settings.from_email)
                        .parse()
                        .unwrap(),
                )
                .to(format!("{} <{}>", &name, &email).parse().unwrap())
                .subject(subject)
                .header(content_type)
                .body(body)
                .unwrap();

            let creds = Credentials::new(settings.smtp_user.clone(), settings.smtp_pass.clone());

            let mailer = SmtpTransport::relay(&settings.smtp_server)
                .unwrap()
                .credentials(creds)
                .build();

            mailer.send(&email)
        })
        .await;

        match result {
            Ok(Ok(_)) => tracing::info!("email sent successfully"),
            Ok(Err(e)) => tracing::error!("could not send email: {e:?}"),
            Err(e) => tracing::error!("mail task failed to execute: {e:?}"),
        }
    });
    Ok(())
}
