//! Change notifications for anything displaying storefront state.

use store_framework::SignalBus;

/// Payload-less notification: receivers re-read the store key they care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorefrontSignal {
    CartChanged,
    AuthChanged,
}

pub type StorefrontSignals = SignalBus<StorefrontSignal>;
