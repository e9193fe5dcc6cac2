//! # FaqDesk Gateway
//! HTTP transport around the agent.
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /api/faqs` | Every knowledge-base question, in order |
//! | `POST /api/chat` | One chat turn (lenient body parsing) |
//! | `GET /health` | Liveness plus entry/conversation counts |
//! | `GET /public/{*path}` | Static files from the public directory |
//! | any other `GET` | `index.html` or the built-in chat page |

pub mod assets;
pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
