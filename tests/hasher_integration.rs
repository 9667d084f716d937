use passhash::{HashConfig, HashError, check, make, needs_rehash};

#[test]
fn login_flow_with_low_cost_hash() {
    let hash = make("correct-password", HashConfig::new(4)).expect("hash");

    assert!(check("correct-password", &hash));
    assert!(!check("wrong-password", &hash));
    assert!(!needs_rehash(&hash, HashConfig::new(4)));
    assert!(needs_rehash(&hash, HashConfig::new(10)));
}

#[test]
fn default_cost_round_trip() {
    let hash = make("password", HashConfig::default()).expect("hash");

    assert!(hash.starts_with("$2"));
    assert!(check("password", &hash));
    assert!(!needs_rehash(&hash, HashConfig::default()));
}

#[test]
fn upgrade_path_after_cost_bump() {
    let stored = make("password", HashConfig::new(4)).expect("hash");
    let target = HashConfig::new(6);

    // On the next successful login the caller re-derives under the new cost.
    assert!(check("password", &stored));
    assert!(needs_rehash(&stored, target));

    let upgraded = make("password", target).expect("rehash");
    assert!(check("password", &upgraded));
    assert!(!needs_rehash(&upgraded, target));
}

#[test]
fn invalid_cost_is_rejected_before_hashing() {
    for cost in [0, 3, 32, u32::MAX] {
        assert!(matches!(
            make("password", HashConfig::new(cost)),
            Err(HashError::InvalidConfiguration(c)) if c == cost
        ));
    }
}

#[test]
fn malformed_stored_hashes_never_panic() {
    for stored in ["", "not-a-valid-hash-format", "$2b$xx$garbage", "$9z$10$salt"] {
        assert!(!check("password", stored));
        assert!(needs_rehash(stored, HashConfig::default()));
    }
}
