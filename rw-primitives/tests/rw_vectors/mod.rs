//! Rabin-Williams known-answer vectors
//!
//! Signatures were produced offline by a reference signer from primes
//! `p = 3 mod 8` and `q = 7 mod 8`. Each vector names the branch the signer
//! picked so tests can confirm every branch is exercised.

#![allow(dead_code)] // Each test binary uses a different subset

/// A known-good `(message, signature)` pair.
pub struct Vector {
    /// Sign selector the signer chose.
    pub e: i8,
    /// Doubling selector the signer chose.
    pub f: u8,
    /// Signed message, UTF-8.
    pub message: &'static str,
    /// Packed signature `[flag] || x`, hex.
    pub signature_hex: &'static str,
}

impl Vector {
    /// Decoded signature bytes.
    pub fn signature(&self) -> Vec<u8> {
        decode_hex(self.signature_hex)
    }
}

/// Decode a hex constant, panicking on malformed test data.
pub fn decode_hex(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).unwrap_or_else(|e| panic!("bad test hex: {e}"))
}

pub const MODULUS_1024_HEX: &str = concat!(
    "a005660cb49be78890740f877955a46c804e46ba02116e8cf9351fa55396ea70a4f19746b26783b6bc445ec7cabf0bc0",
    "2520eb4a71d98fdfedf38f034ac288edac4306108e537993235fbf9c6856510b39b7402938ecd3afef0f896317dc007e",
    "4f53184c0612dcd6b205444cf9b30f425055db3b59096d04a74c302a5b8c6315",
);

pub const MODULUS_2048_HEX: &str = concat!(
    "c6493745232d89d4e23a2f9818b6496ebc1ab98d641d37335345757d38ac4c33a6f448383931fe624ab54f268817ca6f",
    "a31ab887535b3a43c1ba3c8d8377f1ee5c8131363c933d55a9647326e1cdb50bcaaaf57714866373008c3895a79f1fd8",
    "e958abf7754a41dc8081e94c3b62a9e3ec089012345cec72351989e759e75657c4539231c062833328cd22d3d339bc5c",
    "8d638a9f5bf0e0fe6bc7f048269aaba718f1245debe0fca2508c795534b2dd2ae2468a5282d163486a21ea4db8c2bac7",
    "50f039432f30c83c8a3c6db38553ef2e9d7e8108ae98e79c45ea8711fd795327591d220f548de5a9eba94186a78f4d79",
    "6d28345ea2c37898184f22ef6594dddd",
);

/// SHA-256 signatures under the 1024-bit modulus, one per branch plus a plain-text message.
pub const SHA256_1024: &[Vector] = &[
    Vector {
        e: -1,
        f: 1,
        message: "message #1",
        signature_hex: concat!(
            "0184b617acd5087aff249cce8171c9cf85e1f4c1489aae6581bd9b2c02814ed203330c0aff0c45460db229f8e6a75832",
            "dbb39da44376cb98c67e81078597231aedccbf42f9abc08d9ec7a57abd88fb737efec266bf4b3e25b700af6b27d7d3ec",
            "b34de04ac827fc5bfc78fba0b94861e9020152a3d1f907412b88e1e3e2e51097fe",
        ),
    },
    Vector {
        e: -1,
        f: 2,
        message: "message #0",
        signature_hex: concat!(
            "031a7d7cf950bc7f322e252ae4aa6402ed75c401cd2bd5c5de0db50aa2ede42a821bb772a0c661f8420ada8cb253edf3",
            "e10ecdee33c3d828915071eafd3fad3362801d1c2c2c497ae9d4c67d65aa1e109fd57f60b662ec2948a14a3f251de4eb",
            "4743514aad1881643a820094533671efcb8b63420eb568fee462c59de7c636a47a",
        ),
    },
    Vector {
        e: 1,
        f: 1,
        message: "message #13",
        signature_hex: concat!(
            "0044fec4c27ef467cc4b89d5ef4c4f0749a1a450c2bfda15aa5d45e23497ba9d9ca096d60e1a6e5a7a78a6f70f1221f5",
            "30ceec52baf66d0c70488a3997cf3d136758afd761b9596ed44dac673684d45a3d2a377a961df1d813ff78b59e21a11c",
            "d977997ec61e5c19ee3fdf22e144072093aa47c487554b6e0114efbfc7c290dc5a",
        ),
    },
    Vector {
        e: 1,
        f: 2,
        message: "message #2",
        signature_hex: concat!(
            "028d9367d3672830b43f867005740252f91c4cb83b96c76aae7199827fca9861840edfb70e7136e9375fb0d65574a3de",
            "242d4d9de9371b86d178264db764f145a9d6bf640ad91d0b2b84ad3fdd46e11394f342e53fe2d9ba91cbf4af37d24471",
            "6a77f1e31b7f9022a773e818e0d0309e44d93f277b9c531a6830c8c61db3dc3bd9",
        ),
    },
    Vector {
        e: 1,
        f: 1,
        message: "Hello, World!",
        signature_hex: concat!(
            "00823dbc651a020fdd292c2c6eb61ea9cce5bfcd71fdcc1d1ba774ca3e943bdac9a56a674d1bfca62bf51f2f00a7e4c9",
            "217f6b5ed0346921e43e07c9e70ffa2787db5a1730258759638f015d84dd7a48c103ab3016599b9506ad159bc53d6c10",
            "0f139224d4ba7b8d4a4b909381fa893a3e77f564f5b1809f7599a5aa34c3b2f6a6",
        ),
    },
];

/// SHA-512 signatures under the same 1024-bit modulus.
pub const SHA512_1024: &[Vector] = &[
    Vector {
        e: -1,
        f: 1,
        message: "message #6",
        signature_hex: concat!(
            "014a3c8e36e56a8164a5ff1fab32e5c85de6202cecaadbc89223db7084383dde834551102282ebd2222ee712b7e559c4",
            "96e894b93abc185f4ddeef94549db91c7b1dc5ae66a6324c0f4034e61aab06f9d4552ce7d018e22e801f0524fa14387c",
            "c687e77662e41c10cde7df3b8402bcb16c85ed193f28bcd810520cfbe0165f3fae",
        ),
    },
    Vector {
        e: -1,
        f: 2,
        message: "message #7",
        signature_hex: concat!(
            "037aaa79004e199d9b212353dcc0339065472e0b18826f9c95f97a8621e86eb610f602c9ad341aa8935e595c56cd88ff",
            "ce6662fc0b9270c54235b913974a353a6f3407b837d26db0df83a82af2560eded2ae7685fc5dc9355f36617173506f6a",
            "a30d354510e3dd8df598a2fff06ada86fdeba120865b4b08fea8e7e1dd32a30675",
        ),
    },
    Vector {
        e: 1,
        f: 1,
        message: "message #3",
        signature_hex: concat!(
            "003090058ebba712293a69b6c16fb348c3fea09f5184f42ca9f9133b3e5af25b18f1b922549f53c57e45da6c6a871e77",
            "dca5df2eb89cd56dfefb33c2a0eb6219b34511a6d077b0c89f0b832c9f3c73cc40fc8d269efd0e19e200a4ee1a3d7e69",
            "a0216b1b75b6312a03c1cdc782db8181cc7c01fc4f09fdbc712c144f8b7ecdb6dc",
        ),
    },
    Vector {
        e: 1,
        f: 2,
        message: "message #0",
        signature_hex: concat!(
            "02950ff126b69838c8db9ff7a437509e913c461dc3e0bed544f005697c3ebd25d94452c5f979644e29ecea516c8acd2b",
            "f4c53ca236b700c2dca923f8bc1a4568aa8a903ac8a143d33dfc521ecf706d8c36c5134c0154c07629dbff784a1ee004",
            "d81fc891e642ea54a732f891d86f534c8b8fbb82a0d9f90d3fa6377d8bf085eda9",
        ),
    },
    Vector {
        e: 1,
        f: 2,
        message: "Hello, World!",
        signature_hex: concat!(
            "028dedeed7c6afb1779a1869492ccfb5920d09bd86a4a6dbcd7831a1bd49ec9695576214ac02a83f2e21a376c3a6943e",
            "3d7696a9ecec8067abf1bfffa0f4dd47daa4a59c231a87d1f4f5a7e9bacb4bf8267a445c500b347f96d2dbae9a9c2c9a",
            "167ea98cc15c5085c85a738bf148505be6b175f88964301020b1b465df0eecc621",
        ),
    },
];

/// SHA-256 signatures under the 2048-bit modulus; every residue is 256 bytes.
pub const SHA256_2048: &[Vector] = &[
    Vector {
        e: -1,
        f: 1,
        message: "message #0",
        signature_hex: concat!(
            "01919282f06080d7b3e050d2adc1970fb6006448b891b449c44820d9b9d7e01ccf2fed9c65cafeff6f89c06a407035f3",
            "da0e13cd88e4198785e106b61005d11ab7fa7c2f2227402d71419eecf6c27d27a445476b9746941b11a295cafb28037f",
            "69dadd3673fd4ac1cd818ed26564576ebd9214cee6293443d09212dc8e16a1ab168ce382d001127eb70f2034bd194192",
            "614fd6691e1339b4221c36bbc4c23f4cc6deb91381875d30fc63affb60539ea1ecf882c9692bebc926d6a32ddb2e6bb5",
            "994dd0ec95505d138c31598d23fe23d7b98404bbc59f962e20ea03c358bd5577f17e80510d3adf2abd7ebbc62ef4c853",
            "a63289d971ce6462d891e687045656a69b",
        ),
    },
    Vector {
        e: -1,
        f: 2,
        message: "message #1",
        signature_hex: concat!(
            "035290684ab4f2b1a32082be20f9f93a953920d77b52d43ed4369ebeda49ced999e3425f6a3ed40475f77937fdd60c04",
            "544984c1db4f354ad63673a494269af8bdfeda4f0d815b151d2024692f228d816f7f21ebf3f0704784c55b54e03470fc",
            "cbf24a2d65d8e80fabf45fd3317e9a8880179e4be9b3a080cf0fc737e841b1ebe97545c865560777b76cd3ded6154ba2",
            "539caec9d156f93b29cc8e7392dfef9755ad273106f9db996ddbaf4d3d04cfc40757510d89da6e88ba9ea4093907b950",
            "7d5b6c9b9be321c3080b0840eea64ffa282ec3d37cd61e9a9646ec7dd25d8132eff1f7ae1a9f0a196189d0a05aa6a6a5",
            "3d50a18de9efe4c34505d7ca42b24584ac",
        ),
    },
    Vector {
        e: 1,
        f: 1,
        message: "message #3",
        signature_hex: concat!(
            "0001faf30c0e6a1bb1f1b7d1d9d59f0b71941792bddb9fe5e99bab6e5fc17998fa0b2d96a81a6fd6a8f87b0dfd47f389",
            "876cc8912f3f395ff67b81887e858e25365edfbf42406d2248a5cbcdefd05e49a7f7edab7ae6307385981a5ed475af30",
            "27b77d0ec5206c9ea8c6e5a04238ceb982b1ad16fe9f2e01e39fb62e9654f2f849fcb782e60690889e5b3fafb13b2fe3",
            "2d13cb8fab26cc371deaa3c1811beb12fbe7ab8bd3efdbf60e947cffda0411fa4bf66c93c36c5c464484b1a2010600c8",
            "aa04309c929cc11561e0a13f614eb9a3488439b3bd48bdb04f236e7cf262cccf9c97208ddcb64f1e41ba0374e22cb213",
            "394b321c26c485984979ae8843951ac5f8",
        ),
    },
    Vector {
        e: 1,
        f: 2,
        message: "message #4",
        signature_hex: concat!(
            "028c3f026699882534558b23c139d9e2499aed6195a882349d74db3631c6fdd4c3bd3e571bc04c7d4df3ef10de536cf6",
            "2c8d91131f22d54330b17562f761f73ef2bab7a0ffb356f7bf244869f28320b4ec435d33a7c6bd85691cc0935a140d42",
            "a2283b1d1d0dbb3390e7ebf31005b36386fbb5863864b115cbd72e33bfd62bfda1f419906c0589f2c0ce9ef13d14cc5d",
            "39be26059cfd5413edf76abc3019d316c56e8fd1acf17bdf8026157e496b6c853f1448931647154666f460b1fb06fd21",
            "836930b0f82d3e8c7946221c27f5c375c4aea9e7e6ebfb5eb2fb6f3c875e900be703db7c049922324cf4c89ca6131ac9",
            "2e0d64a699f59be2c678cbcba174c559ff",
        ),
    },
    Vector {
        e: 1,
        f: 1,
        message: "Hello, World!",
        signature_hex: concat!(
            "00339d765549d46269a1863adbf146952711c27dab5ce26c610091ff4fdc0062b251c0a26c7242e4c80227f4147543a4",
            "589cb6c6334177a9514a9d72cc67edefad94d252d6337138ea33fbf23ad0b9c6ec02a9752ffafd2e0d18ab52da78049f",
            "284e04aa198d11cf278fa298dfe1d0888c6216f8ff5b8776e9da5e32e12b85e9d1bf17ce744c4f1fc052b2cdbe1c922f",
            "830aba02be38fa6b0b4dad47184ee600abbfa39ded7c444a5364e64d30f785d846f6c3aa6ddf450e120e81b2d53ad02b",
            "6cfe63dfd4f459556a442bcf94b81ec34a36115f6808c369b2533487d5b4620d1fd15100f38981363a116e5b07f3fce1",
            "de4177b2641eb1de623745c977a5d023f1",
        ),
    },
];
