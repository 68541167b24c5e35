//! Address-book contact.

use gadget_model::{FieldDescriptor, FieldKind, Schema, Shared, Value, impl_gadget};
use std::sync::OnceLock;

#[derive(Clone, Default)]
struct ContactData {
    first_name: String,
    last_name: String,
    emails: Vec<String>,
    avatar: Vec<u8>,
}

/// A person with a required last name.
///
/// `lastName` is always written on encode and must be present on decode,
/// even when empty.
#[derive(Clone, Default)]
pub struct Contact {
    d: Shared<ContactData>,
}

impl Contact {
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let mut contact = Self::default();
        contact.set_first_name(first_name);
        contact.set_last_name(last_name);
        contact
    }

    pub fn first_name(&self) -> &str {
        &self.d.read().first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.d.mutate().first_name = first_name.into();
    }

    pub fn last_name(&self) -> &str {
        &self.d.read().last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.d.mutate().last_name = last_name.into();
    }

    pub fn emails(&self) -> &[String] {
        &self.d.read().emails
    }

    pub fn set_emails(&mut self, emails: Vec<String>) {
        self.d.mutate().emails = emails;
    }

    pub fn add_email(&mut self, email: impl Into<String>) {
        self.d.mutate().emails.push(email.into());
    }

    /// Raw avatar image bytes, base64 on the wire.
    pub fn avatar(&self) -> &[u8] {
        &self.d.read().avatar
    }

    pub fn set_avatar(&mut self, avatar: Vec<u8>) {
        self.d.mutate().avatar = avatar;
    }
}

fn contact_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("Contact")
            .field(FieldDescriptor::new::<Contact>(
                "firstName",
                FieldKind::Text,
                |g| Value::from(g.first_name()),
                |g, v| {
                    g.set_first_name(v.into_text()?);
                    Ok(())
                },
            ))
            .field(
                FieldDescriptor::new::<Contact>(
                    "lastName",
                    FieldKind::Text,
                    |g| Value::from(g.last_name()),
                    |g, v| {
                        g.set_last_name(v.into_text()?);
                        Ok(())
                    },
                )
                .required(),
            )
            .field(FieldDescriptor::new::<Contact>(
                "emails",
                FieldKind::list(FieldKind::Text),
                |g| Value::list(g.emails().iter().map(String::as_str)),
                |g, v| {
                    g.set_emails(v.into_list_of(Value::into_text)?);
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<Contact>(
                "avatar",
                FieldKind::Bytes,
                |g| Value::Bytes(g.avatar().to_vec()),
                |g, v| {
                    g.set_avatar(v.into_bytes()?);
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(Contact, "Contact", contact_schema, d);
