//! C# accessibility keywords.

use tessera_foundation::AccessModifier;

/// The C# keyword(s) for an access modifier.
#[must_use]
pub const fn access_keyword(access: AccessModifier) -> &'static str {
    match access {
        AccessModifier::Private => "private",
        AccessModifier::Protected => "protected",
        AccessModifier::Internal => "internal",
        AccessModifier::ProtectedOrInternal => "protected internal",
        AccessModifier::ProtectedAndInternal => "private protected",
        AccessModifier::Public => "public",
    }
}

/// Returns true if C# permits `access` on a namespace-scope type.
#[must_use]
pub const fn is_allowed_in_namespace_scope(access: AccessModifier) -> bool {
    matches!(access, AccessModifier::Internal | AccessModifier::Public)
}
