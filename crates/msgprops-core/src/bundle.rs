use crate::error::BundleError;
use crate::message::{Message, MessageId};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

/// Read access to a locale-scoped set of messages.
///
/// Renderers only depend on this trait, which lets wrappers such as a
/// lookup-tracking bundle stand in for the real bundle.
pub trait Bundle: Send + Sync {
    /// Returns the message with the given id, if the bundle has one.
    fn lookup(&self, id: MessageId) -> Option<&Message>;

    fn locale(&self) -> &str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates all messages. [`MessageBundle`] yields them by ascending id.
    fn messages(&self) -> Box<dyn Iterator<Item = &Message> + '_>;
}

impl<B: Bundle + ?Sized> Bundle for &B {
    fn lookup(&self, id: MessageId) -> Option<&Message> {
        (**self).lookup(id)
    }

    fn locale(&self) -> &str {
        (**self).locale()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn messages(&self) -> Box<dyn Iterator<Item = &Message> + '_> {
        (**self).messages()
    }
}

impl<B: Bundle + ?Sized> Bundle for Box<B> {
    fn lookup(&self, id: MessageId) -> Option<&Message> {
        (**self).lookup(id)
    }

    fn locale(&self) -> &str {
        (**self).locale()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn messages(&self) -> Box<dyn Iterator<Item = &Message> + '_> {
        (**self).messages()
    }
}

impl<B: Bundle + ?Sized> Bundle for Arc<B> {
    fn lookup(&self, id: MessageId) -> Option<&Message> {
        (**self).lookup(id)
    }

    fn locale(&self) -> &str {
        (**self).locale()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn messages(&self) -> Box<dyn Iterator<Item = &Message> + '_> {
        (**self).messages()
    }
}

/// An in-memory bundle keyed by message id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageBundle {
    locale: String,
    messages: BTreeMap<MessageId, Message>,
}

impl MessageBundle {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: BTreeMap::new(),
        }
    }

    /// Builds a bundle, rejecting the input if two messages share an id.
    pub fn from_messages(
        locale: impl Into<String>,
        messages: impl IntoIterator<Item = Message>,
    ) -> Result<Self, BundleError> {
        let mut bundle = Self::new(locale);
        for message in messages {
            bundle.insert(message)?;
        }
        Ok(bundle)
    }

    /// Adds a message. An existing message with the same id is never replaced.
    pub fn insert(&mut self, message: Message) -> Result<(), BundleError> {
        match self.messages.entry(message.id()) {
            Entry::Occupied(entry) => Err(BundleError::DuplicateMessageId(*entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(message);
                Ok(())
            },
        }
    }

    pub fn contains(&self, id: MessageId) -> bool {
        self.messages.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = MessageId> + '_ {
        self.messages.keys().copied()
    }
}

impl Bundle for MessageBundle {
    fn lookup(&self, id: MessageId) -> Option<&Message> {
        self.messages.get(&id)
    }

    fn locale(&self) -> &str {
        &self.locale
    }

    fn len(&self) -> usize {
        self.messages.len()
    }

    fn messages(&self) -> Box<dyn Iterator<Item = &Message> + '_> {
        Box::new(self.messages.values())
    }
}
