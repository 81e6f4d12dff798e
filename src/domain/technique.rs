//! Closed catalog of phishing URL-obfuscation techniques.
//!
//! Techniques are a fixed, process-wide constant set. The wire form is the
//! kebab-case identifier; [`Technique::definition`] provides the
//! human-readable description used in prompt construction.

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One named phishing-obfuscation strategy used to shape a deceptive URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technique {
    CharacterSubstitution,
    Homoglyphs,
    IdnHomograph,
    DotManipulation,
    HyphenInsertion,
    TldSwap,
    SubdomainAbuse,
    ComboSquatting,
    Typosquatting,
    Punycode,
    PathManipulation,
    OpenRedirect,
    AtSymbolAbuse,
    PortAbuse,
    HttpsDeception,
    LookalikeDomain,
}

impl Technique {
    /// Every technique, in catalog order.
    pub const ALL: [Technique; 16] = [
        Technique::CharacterSubstitution,
        Technique::Homoglyphs,
        Technique::IdnHomograph,
        Technique::DotManipulation,
        Technique::HyphenInsertion,
        Technique::TldSwap,
        Technique::SubdomainAbuse,
        Technique::ComboSquatting,
        Technique::Typosquatting,
        Technique::Punycode,
        Technique::PathManipulation,
        Technique::OpenRedirect,
        Technique::AtSymbolAbuse,
        Technique::PortAbuse,
        Technique::HttpsDeception,
        Technique::LookalikeDomain,
    ];

    /// The wire identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Technique::CharacterSubstitution => "character-substitution",
            Technique::Homoglyphs => "homoglyphs",
            Technique::IdnHomograph => "idn-homograph",
            Technique::DotManipulation => "dot-manipulation",
            Technique::HyphenInsertion => "hyphen-insertion",
            Technique::TldSwap => "tld-swap",
            Technique::SubdomainAbuse => "subdomain-abuse",
            Technique::ComboSquatting => "combo-squatting",
            Technique::Typosquatting => "typosquatting",
            Technique::Punycode => "punycode",
            Technique::PathManipulation => "path-manipulation",
            Technique::OpenRedirect => "open-redirect",
            Technique::AtSymbolAbuse => "at-symbol-abuse",
            Technique::PortAbuse => "port-abuse",
            Technique::HttpsDeception => "https-deception",
            Technique::LookalikeDomain => "lookalike-domain",
        }
    }

    /// Parses a wire identifier, returning `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Technique> {
        Technique::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Human-readable definition, used only when constructing prompts.
    pub fn definition(&self) -> &'static str {
        match self {
            Technique::CharacterSubstitution => {
                "Swap a character for a similar-looking one (e.g. amazon.com -> arnazon.com, 0 for o)"
            }
            Technique::Homoglyphs => {
                "Replace letters with visually identical Unicode characters from other scripts (e.g. rn -> m lookalike)"
            }
            Technique::IdnHomograph => {
                "Use internationalized domain name Unicode characters that render identically (e.g. Cyrillic a vs Latin a)"
            }
            Technique::DotManipulation => {
                "Add, remove, or move dots in the domain (e.g. amazon.com -> amaz.on.com)"
            }
            Technique::HyphenInsertion => {
                "Insert hyphens to break up the real domain (e.g. amazon.com -> a-mazon.com or amazon-login.com)"
            }
            Technique::TldSwap => {
                "Change the top-level domain (e.g. amazon.com -> amazon.co or amazon.net or amazon.org)"
            }
            Technique::SubdomainAbuse => {
                "Make the real domain a subdomain of a fake one (e.g. amazon.com -> amazon.verify-login.com)"
            }
            Technique::ComboSquatting => {
                "Append a legitimate-sounding word to the real domain (e.g. amazon.com -> amazon-secure.com or amazonlogin.com)"
            }
            Technique::Typosquatting => {
                "Misspell the domain the way a hurried typist would (e.g. amazon.com -> amazom.com or amaozn.com)"
            }
            Technique::Punycode => {
                "Encode a homograph domain in its xn-- form so the browser renders the lookalike (e.g. xn--amazn-mye.com)"
            }
            Technique::PathManipulation => {
                "Hide the real brand in the path of an unrelated domain (e.g. evil-site.com/amazon.com/signin)"
            }
            Technique::OpenRedirect => {
                "Route through a trusted site's redirect endpoint (e.g. trusted.com/redirect?url=evil-site.com)"
            }
            Technique::AtSymbolAbuse => {
                "Put the real domain before an @ so the browser ignores it (e.g. amazon.com@evil-site.com)"
            }
            Technique::PortAbuse => {
                "Append an unusual port to distract from the actual host (e.g. amazon.com.evil-site.com:8080)"
            }
            Technique::HttpsDeception => {
                "Put 'https' or 'secure' inside the domain name itself (e.g. https-amazon.com or amazon-ssl.com)"
            }
            Technique::LookalikeDomain => {
                "Register a domain that reads like the brand at a glance (e.g. amazonsupport-help.com)"
            }
        }
    }

    /// Picks one technique uniformly at random from the catalog complement
    /// of `exclude`, preserving catalog order when forming the complement.
    ///
    /// Returns `None` when the exclusion set covers the whole catalog.
    /// Callers on the creation path guarantee a non-empty complement via
    /// prior request validation.
    pub fn choose_excluding(exclude: &[Technique]) -> Option<Technique> {
        let available: Vec<Technique> = Technique::ALL
            .into_iter()
            .filter(|t| !exclude.contains(t))
            .collect();

        available.choose(&mut rand::rng()).copied()
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_sixteen_techniques() {
        assert_eq!(Technique::ALL.len(), 16);
    }

    #[test]
    fn test_identifier_round_trip() {
        for technique in Technique::ALL {
            assert_eq!(Technique::parse(technique.as_str()), Some(technique));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Technique::parse("dns-poisoning"), None);
        assert_eq!(Technique::parse("Homoglyphs"), None);
        assert_eq!(Technique::parse(""), None);
    }

    #[test]
    fn test_serde_matches_as_str() {
        for technique in Technique::ALL {
            let json = serde_json::to_string(&technique).unwrap();
            assert_eq!(json, format!("\"{}\"", technique.as_str()));

            let parsed: Technique = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, technique);
        }
    }

    #[test]
    fn test_definitions_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for technique in Technique::ALL {
            assert!(seen.insert(technique.definition()));
        }
    }

    #[test]
    fn test_choose_never_returns_excluded() {
        let exclude: Vec<Technique> = Technique::ALL[..8].to_vec();

        for _ in 0..100 {
            let chosen = Technique::choose_excluding(&exclude).unwrap();
            assert!(!exclude.contains(&chosen));
        }
    }

    #[test]
    fn test_choose_with_single_candidate() {
        let exclude: Vec<Technique> = Technique::ALL[..15].to_vec();

        let chosen = Technique::choose_excluding(&exclude).unwrap();
        assert_eq!(chosen, Technique::ALL[15]);
    }

    #[test]
    fn test_choose_with_empty_complement() {
        let exclude: Vec<Technique> = Technique::ALL.to_vec();
        assert_eq!(Technique::choose_excluding(&exclude), None);
    }

    #[test]
    fn test_choose_with_no_exclusions() {
        assert!(Technique::choose_excluding(&[]).is_some());
    }
}
