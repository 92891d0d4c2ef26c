//! FirstPing API Library
//!
//! Backend for a cold-outreach email generator: static form catalogs,
//! LinkedIn profile and company news enrichment behind a TTL cache, prompt
//! construction, and email generation through Gemini with deterministic
//! template fallback.
//!
//! # Modules
//!
//! - `api`: Route table and middleware.
//! - `core`: Domain logic (models, prompts, generation).
//! - `integrations`: External providers (Gemini, ScrapingDog, News API).
//! - `cache`: TTL response cache.
//! - `catalog`: Business types, services and tones.
//! - `circuit_breaker`: Circuit breaker for model calls.
//! - `config`: Configuration management.
//! - `enrichment`: Cache-then-fetch profile and news lookup.
//! - `errors`: Error handling types.
//! - `fallback`: Template emails.
//! - `gemini_client`: Gemini API client.
//! - `generator`: Model output parsing and fallback decision.
//! - `handlers`: HTTP request handlers.
//! - `models`: Core data models.
//! - `prompts`: Prompt builder.
//! - `services`: ScrapingDog and News API clients.

pub mod api;
pub mod core;
pub mod integrations;

pub mod cache;
pub mod catalog;
pub mod circuit_breaker;
pub mod config;
pub mod enrichment;
pub mod errors;
pub mod fallback;
pub mod gemini_client;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod services;
