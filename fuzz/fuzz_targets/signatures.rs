// Copyright (c) 2024, The Tari Project
// SPDX-License-Identifier: BSD-3-Clause


#![no_main]

use libfuzzer_sys::fuzz_target;
use ringsig::RingSignature;

// Test basic deserialization, re-encoding, and verification on arbitrary records
fuzz_target!(|data: &[u8]| {
	// If deserialization succeeds, re-encoding should round-trip structurally and
	// verification should run to completion on hostile contents
	if let Ok(signature) = RingSignature::from_bytes(data) {
		let bytes = signature.to_bytes().unwrap();
		assert_eq!(RingSignature::from_bytes(&bytes).unwrap(), signature);

		let _ = signature.verify(b"fuzz message");
	}
});
