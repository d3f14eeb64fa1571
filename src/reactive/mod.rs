//! Reactive values and one-way bindings.
//!
//! The camera never polls its targets. Entity data is published into
//! [`Observable`] handles, and the viewport attaches a [`Binding`] that
//! recomputes its transform every time one of those handles changes.
//!
//! - [`Observable`] – shared, version-tracked value with change callbacks
//! - [`Subscription`] – RAII guard; dropping it removes the callback
//! - [`Source`] – type-erased "notifies on change" seam used by bindings
//! - [`Binding`] – recompute closure attached to a set of sources
//! - [`Derived`] – observable kept in sync with an expression over sources
//! - [`ReadOnly`] – subscribe-only view handed out for internally driven values
//!
//! # Propagation
//!
//! Propagation is synchronous and eager: when [`Observable::set`] returns,
//! every subscriber (and transitively every binding downstream of it) has
//! already run. Callbacks run with no internal lock held, so they may read
//! or write any observable, including the one that triggered them.
//!
//! Handles are `Send + Sync` so they can be stored in ECS components and
//! resources, but writes are expected to come from a single update thread.
//! Hosts that mutate observables from several threads must serialize
//! those writes themselves.

pub mod binding;
pub mod observable;
pub mod readonly;

pub use binding::{Binding, Derived};
pub use observable::{Observable, Source, Subscription};
pub use readonly::ReadOnly;
