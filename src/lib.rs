//! Encode/decode guardrails for persisted consensus state and RPC payloads.

/// Type descriptors, visibility checks, destination audits and codec gates.
pub mod guard;
/// Request/reply envelopes and the client end of an RPC call.
pub mod rpc;
