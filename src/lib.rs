//! Clinic Inbox Triage - Patient Message Analysis Backend
//!
//! This crate analyzes patient portal messages with a language model and
//! produces structured triage results (urgency, categories, summary, draft
//! reply, safety flags, escalation) for clinician review.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
