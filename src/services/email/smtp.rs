use anyhow::Context;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{Mailer, OutboundEmail};

const IMPLICIT_TLS_PORT: u16 = 465;

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Port 465 uses implicit TLS, any other port negotiates STARTTLS.
    pub fn new(host: &str, port: u16, username: String, password: String) -> anyhow::Result<Self> {
        let relay = if port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        };
        let builder = relay.with_context(|| format!("invalid SMTP relay host: {host}"))?;

        let transport = builder
            .port(port)
            .credentials(Credentials::new(username, password))
            .build();

        Ok(Self { transport })
    }
}

pub fn build_message(email: &OutboundEmail) -> anyhow::Result<Message> {
    let from = Mailbox::new(
        Some(email.from_name.clone()),
        email
            .from_address
            .parse()
            .with_context(|| format!("invalid sender address: {}", email.from_address))?,
    );
    let to: Mailbox = email
        .to
        .parse()
        .with_context(|| format!("invalid recipient address: {:?}", email.to))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(email.text.clone())
        .context("failed to build email")
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> anyhow::Result<()> {
        let message = build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .context("failed to send email via SMTP")?;

        tracing::info!(to = %email.to, code = %response.code(), "email sent");
        Ok(())
    }
}
