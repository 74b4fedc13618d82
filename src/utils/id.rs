use crate::constants::STATE_LENGTH;

const STATE_ALPHABET: [char; 62] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4',
    '5', '6', '7', '8', '9',
];

/// Generates a random opaque `state` value for the synchronization handshake
///
/// The service echoes the state back on the redirect so the caller can verify
/// the round trip. Values are alphanumeric, URL-safe and never empty.
///
/// # Examples
/// ```
/// use figo_client::utils::id::get_state;
/// let state = get_state();
/// assert_eq!(state.len(), 24);
/// ```
pub fn get_state() -> String {
    nanoid::nanoid!(STATE_LENGTH, &STATE_ALPHABET)
}
