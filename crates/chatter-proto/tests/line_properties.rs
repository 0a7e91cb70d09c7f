//! Property-based tests for server line decoding.

use chatter_proto::{ServerEvent, encode_outgoing, prefix};
use proptest::prelude::*;

/// All control prefixes, for filtering generated input.
const PREFIXES: [&str; 6] = [
    prefix::SUBMIT_NAME,
    prefix::NAME_EMPTY,
    prefix::NAME_USED,
    prefix::NAME_ACCEPTED,
    prefix::SERVER_MESSAGE,
    prefix::MESSAGE,
];

proptest! {
    /// Decoding is total: any string decodes to some event, never panics.
    #[test]
    fn decode_is_total(line in ".*") {
        let _ = ServerEvent::decode(&line);
    }

    /// Lines with no matching prefix always decode to `Unrecognized` and
    /// carry the raw line unchanged.
    #[test]
    fn unmatched_prefix_is_unrecognized(line in ".*") {
        prop_assume!(PREFIXES.iter().all(|p| !line.starts_with(p)));

        prop_assert_eq!(
            ServerEvent::decode(&line),
            ServerEvent::Unrecognized { raw: line.clone() }
        );
    }

    /// A generated payload survives the prefix-plus-space framing intact.
    #[test]
    fn chat_payload_roundtrips(payload in "[^\r\n]*") {
        let line = format!("{} {payload}", prefix::MESSAGE);

        prop_assert_eq!(
            ServerEvent::decode(&line),
            ServerEvent::ChatMessage { text: payload.clone() }
        );
    }

    /// Same framing property for the name-negotiation payload lines.
    #[test]
    fn name_payload_roundtrips(name in "[^\r\n]*") {
        let used = format!("{} {name}", prefix::NAME_USED);
        let accepted = format!("{} {name}", prefix::NAME_ACCEPTED);

        prop_assert_eq!(
            ServerEvent::decode(&used),
            ServerEvent::NameUsed { name: name.clone() }
        );
        prop_assert_eq!(
            ServerEvent::decode(&accepted),
            ServerEvent::NameAccepted { name: name.clone() }
        );
    }

    /// Outgoing encoding is the identity: no escaping, no framing beyond the
    /// transport's line delimiter.
    #[test]
    fn outgoing_is_identity(text in ".*") {
        prop_assert_eq!(encode_outgoing(&text), text.as_str());
    }
}
