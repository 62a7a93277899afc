use std::fs;

use async_trait::async_trait;
use color_eyre::Result;
use eyre::WrapErr;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use serde_json::Value;

/// Outbound notification seam. Delivery is best-effort: callers log failures
/// and never surface them to the client.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, to: &str, subject: &str, template_path: &str, data: &Value)
        -> Result<()>;
}

pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl EmailService {
    pub fn new(smtp_host: &str, smtp_user: &str, smtp_pass: &str, from_address: &str) -> Result<Self> {
        let creds = Credentials::new(smtp_user.to_string(), smtp_pass.to_string());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_host)
            .wrap_err("Building SMTP transport")?
            .credentials(creds)
            .build();

        Ok(Self {
            mailer,
            from_address: from_address.to_string(),
        })
    }

    fn render(template_path: &str, data: &Value) -> Result<String> {
        let mut body = fs::read_to_string(template_path)?;
        if let Some(fields) = data.as_object() {
            for (key, value) in fields {
                let placeholder = format!("{{{{{}}}}}", key);
                body = body.replace(&placeholder, value.as_str().unwrap_or_default());
            }
        }
        Ok(body)
    }
}

#[async_trait]
impl Notifier for EmailService {
    async fn notify(
        &self,
        to: &str,
        subject: &str,
        template_path: &str,
        data: &Value,
    ) -> Result<()> {
        let body = Self::render(template_path, data)?;

        let email = lettre::Message::builder()
            .from(self.from_address.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(lettre::message::header::ContentType::TEXT_HTML)
            .body(body)?;

        self.mailer.send(email).await?;

        Ok(())
    }
}
