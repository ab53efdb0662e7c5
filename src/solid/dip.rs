// SOLID 5: Dependency Inversion - high-level policy depends on an
// abstraction, and the concrete sender is injected from outside.

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "dip",
    topic: Topic::Solid,
    summary: "Notifier hard-wired to email vs one that receives any MessageSender",
    run,
};

// ============================================================================
// Bad: the notifier builds its own concrete dependency
// ============================================================================

pub struct EmailClient;

impl EmailClient {
    pub fn send_email(&self, to: &str, body: &str) -> String {
        format!("email to {}: {}", to, body)
    }
}

pub struct EmailOnlyNotifier {
    client: EmailClient,
}

impl EmailOnlyNotifier {
    pub fn new() -> Self {
        Self {
            client: EmailClient,
        }
    }

    pub fn notify(&self, to: &str, body: &str) -> String {
        self.client.send_email(to, body)
    }
}

impl Default for EmailOnlyNotifier {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Good: depend on the capability, not the channel
// ============================================================================

pub trait MessageSender {
    fn channel(&self) -> &'static str;
    fn send(&self, to: &str, body: &str) -> String;
}

pub struct EmailSender;
pub struct SmsSender;
pub struct PushSender {
    pub app: String,
}

impl MessageSender for EmailSender {
    fn channel(&self) -> &'static str {
        "email"
    }

    fn send(&self, to: &str, body: &str) -> String {
        format!("email to {}: {}", to, body)
    }
}

impl MessageSender for SmsSender {
    fn channel(&self) -> &'static str {
        "sms"
    }

    // SMS bodies are cut at 160 characters
    fn send(&self, to: &str, body: &str) -> String {
        let text: String = body.chars().take(160).collect();
        format!("sms to {}: {}", to, text)
    }
}

impl MessageSender for PushSender {
    fn channel(&self) -> &'static str {
        "push"
    }

    fn send(&self, to: &str, body: &str) -> String {
        format!("push via {} to {}: {}", self.app, to, body)
    }
}

pub struct Notifier {
    sender: Box<dyn MessageSender>,
}

impl Notifier {
    pub fn new(sender: Box<dyn MessageSender>) -> Self {
        Self { sender }
    }

    pub fn channel(&self) -> &'static str {
        self.sender.channel()
    }

    pub fn order_shipped(&self, customer: &str, order_id: u32) -> String {
        self.sender
            .send(customer, &format!("order #{} has shipped", order_id))
    }
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Dependency Inversion");

    session.step("Bad: EmailOnlyNotifier creates its own EmailClient");
    let notifier = EmailOnlyNotifier::new();
    session.result(notifier.notify("ada@example.com", "order #17 has shipped"));
    session.note("switching to SMS means editing EmailOnlyNotifier");

    session.step("Good: Notifier receives a MessageSender");
    let senders: Vec<Box<dyn MessageSender>> = vec![
        Box::new(EmailSender),
        Box::new(SmsSender),
        Box::new(PushSender {
            app: "ShopApp".to_string(),
        }),
    ];
    for sender in senders {
        let notifier = Notifier::new(sender);
        session.result(notifier.order_shipped("ada", 17));
    }
    Ok(())
}
