//! The embedded grammar artifact and the handle exported over it.
//!
//! The grammar compiler produces `grammar/var2.json` at authoring time; this
//! module embeds that artifact into the binary and exposes it behind an
//! opaque [`GrammarHandle`]. The exporter performs no computation: it is a
//! named access point to a build artifact, and it cannot fail at runtime.

/// The compiled Var2 grammar definition, embedded verbatim.
pub const GRAMMAR_JSON: &str = include_str!("../grammar/var2.json");

/// An opaque, stable reference to a compiled grammar artifact.
///
/// Handles are cheap to copy and compare by identity: two handles are equal
/// when they refer to the same underlying artifact text. The handle neither
/// owns nor interprets the artifact; turning it into something usable is the
/// job of [`Language::load`](crate::Language::load).
#[derive(Clone, Copy)]
pub struct GrammarHandle {
    raw: &'static str,
}

impl GrammarHandle {
    /// Wraps raw artifact text in a handle.
    ///
    /// Exists so alternate (or deliberately corrupted) artifacts can be fed
    /// through the same loading path as the embedded one.
    #[must_use]
    pub const fn from_raw(raw: &'static str) -> Self {
        Self { raw }
    }

    /// The artifact text this handle refers to.
    #[must_use]
    pub const fn raw(self) -> &'static str {
        self.raw
    }
}

impl PartialEq for GrammarHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.raw, other.raw)
    }
}

impl Eq for GrammarHandle {}

impl std::fmt::Debug for GrammarHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "GrammarHandle({} bytes)", self.raw.len())
    }
}

/// Returns the handle to the embedded Var2 grammar.
///
/// Deterministic across calls within a process: every call refers to the
/// same statically embedded artifact. No side effects, no failure mode.
#[must_use]
pub fn grammar() -> GrammarHandle {
    GrammarHandle::from_raw(GRAMMAR_JSON)
}
