//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the resolution pipeline and the systems
//! it talks to. Adapters implement them; the application layer consumes
//! them through `Arc<dyn ...>` or generics.
//!
//! ```text
//!   chain listener ──► MarketEventSource ──► Listener ──► ResolutionSubmitter ──► chain relay
//!                                               │
//!                                  ┌────────────┴────────────┐
//!                                  ▼                         ▼
//!                                 Llm                  FixtureSource
//!                          (inference service)       (statistics API)
//! ```

pub mod inbound;
pub mod outbound;
