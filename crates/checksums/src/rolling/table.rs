// Fixed lookup table for the rolling checksum (see rolling.rs).
//
// The specific constants are unconstrained by the algorithm's contract:
// any 256 fixed u32 values work, as long as they never change at runtime.
// This table is generated once from a fixed seed so checksums are stable
// across builds and across machines.
#[rustfmt::skip]
static TABLE: [u32; 256] = [
    0x86a9ba52, 0x139c3406, 0x59e8d2e8, 0x3022e1a5,
    0xcebb9abb, 0x86ee6590, 0xbb06390c, 0x43566227,
    0x61d7363d, 0xbd1fda6c, 0x755b28c1, 0x8d57dd39,
    0x51a4c68a, 0xff38a8ef, 0x7fbcc288, 0xd570d52e,
    0xd3835bde, 0x0f489ec4, 0x292a3320, 0x0db0bd90,
    0xc866c6e0, 0x748fc35d, 0xd0bd4945, 0x42cb1db0,
    0x15d25b0e, 0xa2f10c77, 0x71d2f8f7, 0x97c33b13,
    0xc234e09c, 0x3cb14b2b, 0xb00d01d5, 0x9de6adc9,
    0xb52038ad, 0xfd2c78dc, 0x6f2ca6f1, 0xeda2d6e9,
    0xd3ebb829, 0x02842e6b, 0xd39dc27a, 0x80fb9bb8,
    0xadb8ff74, 0x84f98549, 0xf316c210, 0xcabae6b1,
    0xe06985b2, 0x89e41215, 0x3905a9e8, 0xf1d9c475,
    0xebbd1d30, 0x4273dc06, 0x7fb8eba7, 0x5ca78e74,
    0x7f4369d1, 0x7c08fa0c, 0x71f63939, 0xb388b279,
    0x8b0e04e6, 0x3d79f909, 0x93593b4c, 0x728a6ed8,
    0x6237e1d1, 0xc54a77bf, 0x2bcc609e, 0xa0ac8c75,
    0x8f5b626b, 0xfadab538, 0x11fbfe2e, 0xa17ca1ad,
    0x68e37303, 0xd88daf16, 0x7ffee9cb, 0x3e6608e2,
    0xe0824af0, 0x667067f7, 0x72183ee1, 0xb45bfa41,
    0x29d884c8, 0xc2a1f517, 0xf23291cc, 0xfeb651cf,
    0x225b3f6e, 0x7285cb0e, 0x000cc231, 0x40d79ba0,
    0xab4741ab, 0x9f292cf0, 0xc3027003, 0x937ff089,
    0xfc76daa7, 0x5de54b72, 0x5d6be8e7, 0x8ff364ea,
    0xd8823b76, 0x6c962b3f, 0xf810bb7c, 0x9e5e7a26,
    0x14807856, 0xfbcb6d57, 0x79d09625, 0x033fe896,
    0xc985fad5, 0x243a3070, 0xf55df238, 0x11ce732e,
    0x714ddaaa, 0x1add9e47, 0xb025c315, 0x91bdb87e,
    0x5a0d3a0e, 0x0de1973c, 0x6d41cc4b, 0xaea84106,
    0x94ee58df, 0x712ed910, 0xe570a18a, 0xeaf85507,
    0x923ce35e, 0x73f4c745, 0x587a2734, 0x5be97e40,
    0x26c38c04, 0x10d61df9, 0xdae684c0, 0x2e5813af,
    0xc702aaa3, 0xcaccef60, 0x7d55e9b2, 0xd1298eb6,
    0x59376b74, 0x41acf01a, 0x7410d9a8, 0x538ad90b,
    0xe0f90bbe, 0x3e15c705, 0x0196ec6a, 0xc8ddf553,
    0xc6c7ef19, 0x2644fd62, 0x052f9e49, 0x6d45038e,
    0xf7bfbdf5, 0x106f9d32, 0x1c7d7fa4, 0xc5368d23,
    0x3660aaab, 0x96091c73, 0x8d051f1e, 0x266bf355,
    0xff5dea82, 0x85dcc852, 0x4ccfd097, 0xc5d312e2,
    0x32ddcce5, 0xd3816f10, 0x2f35f869, 0x55e0918c,
    0xb20de8ac, 0xd563dd8f, 0x10cf783e, 0x6433efd3,
    0x3b5496ac, 0x20e8a9b1, 0x7392a756, 0xfbd2a31f,
    0xfcdec645, 0x44ef6ddc, 0xaf9f30a3, 0xcea3338b,
    0x08f639dd, 0x7ae62acf, 0xcf2effbd, 0x28c3b244,
    0xed7b429b, 0xa2588264, 0x2169ab40, 0xed38bfce,
    0xf70effc8, 0x2bb25b42, 0x52f121ec, 0x36439290,
    0x1cf7dcfa, 0x7d2e6d85, 0x5a9680e5, 0xc426aa5c,
    0x871010ec, 0x542bb839, 0xcc02b9c7, 0xef4476d8,
    0xe4131fdc, 0x765a7a46, 0xec186298, 0x4fa2f141,
    0x94ccf439, 0x8569138a, 0xb51e4110, 0x6c61148d,
    0xb737d606, 0x0e6fbf65, 0xdd2ab3aa, 0xe014ff33,
    0x73cad4e1, 0xe122a892, 0xabd20624, 0xbff27a3c,
    0x8a8b0e58, 0xd93a47fa, 0x7722629b, 0x5635a5ac,
    0x61b699bf, 0x28b53ce0, 0x8297c14a, 0x1a7751ff,
    0x6a8e63f0, 0xd48e9516, 0xcc28252f, 0xfaa3137e,
    0xffbbafcf, 0xfab588ed, 0x881be17a, 0x3be7f0fa,
    0xc47aa84a, 0x0e2473e5, 0xe245e85e, 0x36b30f3e,
    0x404afebc, 0x97e540ea, 0x2af59c0a, 0xfdd51210,
    0x3ca71445, 0xd30cd729, 0xa98602f1, 0x1cc302d3,
    0x51b47922, 0x8042622d, 0xf6af3697, 0x3ee2ab07,
    0x68a97af3, 0xa221f5a1, 0xf8aaba3a, 0x45c90875,
    0x2118313a, 0x1e86db1b, 0xf6f2bc3f, 0xc18a1d4b,
    0xb9457f26, 0x84a567bb, 0x887230d1, 0xd1132eb3,
    0xe5edb1e6, 0x84a86c4b, 0x2029d47c, 0x3ff63be3,
    0xefebc325, 0x887217f2, 0x23681943, 0x9fcc425a,
];
