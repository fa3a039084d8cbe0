//! Precomputed parametric descriptions.
//!
//! Each bundle was produced offline from the Schulz-Mihov construction and is
//! stored exactly as generated: a bit-packed transition table, a bit-packed
//! boundary-offset table of the same shape, and one final-state addendum per
//! parametric state. Table rows are indexed by
//! `(characteristic_vector - 1) * states_count + state_id`.

use std::borrow::Cow;

use super::packed_array::PackedArray;
use super::ParametricDescription;

static DEGREE_1_TRANSITIONS: [u64; 4] = [
    0xbb6d56922db55b69, 0x6ab6d45220924526, 0x848249051ae93593, 0x000000011a20a444,
];

static DEGREE_1_BOUNDARY_OFFSETS: [u64; 3] = [
    0x5554a00001500000, 0x55557a0283c00015, 0x0000000000155555,
];

static DEGREE_1_FINAL_ADDENDUMS: [i32; 5] = [0, 1, 0, -1, -1];

static DEGREE_1_TRANSPOSITION_TRANSITIONS: [u64; 5] = [
    0x6cb6c48db6cb6db1, 0x8a488251231273db, 0x473c49cc93b2db6c, 0x829222d84825120a,
    0x0000000000002c88,
];

static DEGREE_1_TRANSPOSITION_BOUNDARY_OFFSETS: [u64; 3] = [
    0x52a0000015000000, 0xa02a0fc000055555, 0x000555555555555e,
];

static DEGREE_1_TRANSPOSITION_FINAL_ADDENDUMS: [i32; 6] = [0, 1, 0, -1, -1, -1];

static DEGREE_2_TRANSITIONS: [u64; 148] = [
    0xef7bdef7bdef79c1, 0xdef7bdef7bdef7bd, 0xbdef7bcf78bdef7b, 0x7bdef7bdef7bdef7,
    0xf0420f7bdef7bdef, 0xe73bdef7bdef7bde, 0xdef7bdef7bdef7bd, 0xbdef3ddef78a578b,
    0x7bdef7bdef7bdef7, 0x779de39ca3f17def, 0xef7bde77bdef7bc5, 0x21083c5f7bdef7bd,
    0x9cef7bdef05fe778, 0x07def7bdef7bdef3, 0xf7bc17f9fe10820f, 0xef7bdef7bce7bbde,
    0xfef14c578bc1f7bd, 0xbdef7bde7bfdef3d, 0x19e4719eef7bdef7, 0xf7a4ff7bd20b9c6d,
    0xa0bbdef3bdef7bce, 0xdef15ee71ce728dd, 0xbdef7bcef79de297, 0xbde7d9ca3719eff7,
    0xf3bce778c5f7bc60, 0x1081da0bfdef3bde, 0xce087def04ae7050, 0x0b0f7bcef7bce739,
    0x7bc83c208e202082, 0xf43def39d073901f, 0xf788420821c3c3de, 0xcf739ee087def04a,
    0x820820a5f7bcef7b, 0xb901f7bc8394a218, 0x397def43def3dd07, 0xef3dfef14c578a1c,
    0xdef7bdef7bde7bdf, 0xbc9515e2798aff7b, 0x39def7ab52bbcf2b, 0x7902a385ce73bdef,
    0xe93c2e7482e71b46, 0x2ff3bcef3bdef3bd, 0xdd20bdcad19e47e8, 0x3fcef39cef7b350b,
    0x71ce728c3a105cf7, 0xef79de295ee715ee, 0xa3798a577bde77bc, 0x9292c1c52c1cb59c,
    0x9e0e739def41de77, 0x7982f79f6728c2a3, 0xe73bcef39de3142f, 0xebd9ca37e82573bc,
    0x1ce77949095e6095, 0x803a11e0f73dcef4, 0x084ae704ae705010, 0x6739ce739ce739ce,
    0xc1345cc68420b20d, 0x5ce7462e7398c345, 0x2388083add76318c, 0x741ce404f0820f08,
    0x0b70f6741d0741ce, 0xac3da083da0de202, 0x6368d9d074630739, 0x84af78842083bcdf,
    0x7b9cf739ee084af7, 0x420820b20c67b9ce, 0x2e7b98c349e1349e, 0x3add6a518c5ee74a,
    0x04e52a0e52886208, 0x7c1d07c1cf741ee4, 0x8398a418820b70e6, 0xf074a307b9ac398a,
    0x4c578bbcdea568d9, 0x7bde7bdfef3dfef1, 0x798aff7bdef7bdef, 0xf939cf7fbc5315e2,
    0xce779ce77bdef79e, 0xcaef2545788a6315, 0x7bce77bdead4aef3, 0x515e20a8e1739cef,
    0xef7ab533dcf2bbc9, 0x2a385ef7b9ce739d, 0xc2e7482e71b46790, 0x3bcef3bdef3bde93,
    0x0b9c6d19e47e82ff, 0x077bcef7a4f44212, 0x46790ba415d0739d, 0xbdecd42f7482f72b,
    0xe84173dcff3bce73, 0x416120bdcad19e40, 0x57bdd0739cef7b35, 0xee71ce728c3a105e,
    0xbcef79de295ee715, 0x9ca3798a577bde77, 0x778a5946257b9c73, 0x631a2e77a2e73bde,
    0xb0714b072d6728ca, 0x9ce77bd0779de4a4, 0xc1cb59ca30a8e783, 0x741de7792935a252,
    0x728c2a39ecf7ba2e, 0xde3142f7982f79f6, 0x82573bce73bcef39, 0x4a460bde7d9ca37e,
    0x73a3073bce778c54, 0x57af6728cba41a30, 0xd0739de524257982, 0xca30e84783dcf73b,
    0x794941a46095ebd9, 0x11ec57be30741ce7, 0xe704ae705010803a, 0xce739ce739ce084a,
    0x9c140420b20d6739, 0xb9ce738214ce612b, 0x08308562739ba739, 0xe630d1704d1731a1,
    0x5d8c631739d18b9c, 0xe61345cc68420eb7, 0xc6739c62e7398c55, 0x82388083add76f7b,
    0xe741ce404f0820f0, 0x20b70f6741d0741c, 0x9015d2883c208e20, 0xe2749c2749b9d073,
    0x820f6837880831c5, 0x6741d18c1ce6b0f6, 0x0de2020ef37d8da3, 0x630739ac5e2883da,
    0x83bcdf6f8bda749c, 0x084af784af788420, 0x67b9ce7b9cf739ee, 0xa12bde210820b20c,
    0xab39bdce7b8214d6, 0x90820830852ab39b, 0x8b9ee630d2784d27, 0x0eb75a946317b9d2,
    0x8c566a1349e42082, 0xb37bc6b39ca2e7b9, 0xa0e528862083add6, 0x7c1cf741ee404e52,
    0x218820b70e67c1d0, 0xd07b9015a528394a, 0x31c5aab49c2b49bd, 0xb0e62a0e62906208,
    0x95a367c1d28c1ee6, 0x8398a418820ef37a, 0xb49ca307b9ac5a92, 0x000003bcdeb38bda,
];

static DEGREE_2_BOUNDARY_OFFSETS: [u64; 89] = [
    0x0000000000000000, 0x0000000000000000, 0x0490000000000000, 0x0000000240000000,
    0x0000001000000000, 0x4100000000000000, 0x0000000000400000, 0x0004900004820924,
    0x0012082490400000, 0x0001000000001240, 0x0000000000001000, 0x0000006d80006130,
    0x24000186c00c0003, 0x1200000201000001, 0x0834000006900006, 0x00492492586800c0,
    0x4924900100124924, 0x0400492490012492, 0x9240049249249240, 0x4924924900100124,
    0x2400400492490012, 0x0000010010000009, 0x0050000061300000, 0x0205249001200005,
    0x30c00c001b61b600, 0x006d86d800061b0c, 0x4000207238c31230, 0x2400402010012412,
    0xa040049049000061, 0x41a4000204949100, 0x061a4c34c20d001a, 0xd30a340069069000,
    0x2492492492606938, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492,
    0x9249249249249249, 0x4924924924924924, 0x2492492492492492, 0x9249249249249249,
    0x4924924924924924, 0x2492492492492492, 0x9249249249249249, 0x1000000924924924,
    0x6130000000000100, 0xda00000568400000, 0x140140000184eda2, 0x0008149240048000,
    0x492db20000528500, 0xc001b61b60002052, 0x6d800061b0c30c00, 0x86ebaeba030006d8,
    0xc48c001b61b60001, 0x6d86d800081c8e30, 0x00207238ebb23000, 0x0040201001241240,
    0x4004904900006124, 0x2400018495a15a80, 0x1252440281001241, 0xaa04004904900008,
    0xa41a400020494915, 0x0061a4c34c20d001, 0xad3a834006906900, 0x001a41a400018693,
    0x9000081a4e34c28d, 0x6938d3aa34006906, 0x9249249249249260, 0x4924924924924924,
    0x2492492492492492, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492,
    0x9249249249249249, 0x4924924924924924, 0x2492492492492492, 0x9249249249249249,
    0x4924924924924924, 0x2492492492492492, 0x9249249249249249, 0x4924924924924924,
    0x2492492492492492, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492,
    0x9249249249249249, 0x4924924924924924, 0x2492492492492492, 0x9249249249249249,
    0x0000000924924924,
];

static DEGREE_2_FINAL_ADDENDUMS: [i32; 30] = [0, 1, 0, -1, -1, 0, -1, -1, 0, -2, -2, -2, -1, -1, 2, 1, 0, -1, -1, -2, -2, -2, -1, -2, -2, -2, -2, -2, -1, -2];

static DEGREE_2_TRANSPOSITION_TRANSITIONS: [u64; 249] = [
    0xaaaaaaaaaaaaa381, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x2aaaaaaaaaaaaaaa,
    0xaaaaaaaaaaaa8f3c, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x40aaaaaaaaaaaaaa,
    0xaaaaaaaaaaaaa810, 0xaaaaaaaaaa38eaaa, 0xaaaaaaaaaaaaaaaa, 0x3c2aaaaaaaaaaaaa,
    0xaaaaa8f3aaaaa145, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaaa, 0x76c3aaaaaaa85a85,
    0xaaaaaa9b3aa3aa1c, 0xaaaaaaaaaaaa3aaa, 0x7aaaaaaaaa3aaaaa, 0x81040aaaaaaa9ba8,
    0xaaaaaaa813ea3aa0, 0xaaaaaaaaaaa8e38e, 0x81aaaaaaaaa3eaaa, 0x082040aaaaaaa81a,
    0xeaaaaaaa813ea3ea, 0xaaaaaaaaaaaa8e3c, 0xa82aaaaaaaaa3eaa, 0x55c53c2aaaaaaa81,
    0xaa3cfaaaa8f3eaa8, 0xaaaaaaaaaaaaaaaa, 0x7a973ceaaaaaaaaa, 0x868063c4a8ea8e3d,
    0xaaa48faaaa9204e3, 0xaaaa38eaaaaaaa8e, 0xa0aa004ea8eaaa3a, 0x3871c76c3a8ea8e4,
    0xa3aa6dbaaaa9b3cf, 0xaaaaa3aaaaaa8eaa, 0x79ea873cfa8eaaa3, 0xf3c78476c3a8ea8f,
    0x8e3aa79baaaa9e04, 0x3eaaaa3ceaaaa8ea, 0xf7a6aa104fa8faaa, 0x4e381081040a8ea8,
    0x38e38e041aaaa811, 0xa3eaaaa38eaaaa8e, 0x85048a88150a8faa, 0x1d0408888040a90a,
    0xe39038e201aaaa88, 0xaa16aaaa410aaaa8, 0xa85224aa41d0a85a, 0x11453c2082040a90,
    0x8f38e3ce041aaaa8, 0xaaa3eaaaa3ceaaaa, 0x0a85208a82145a8f, 0x881c5142882040a9,
    0xa8f3903ce201aaaa, 0x5aaa16aaaa150aaa, 0x90a85224aa21c5a8, 0xa8f3eaa855c53c2a,
    0xaaaaaaaaaa3cf3ea, 0xaaaaaaaaaaaaaaaa, 0xa8fa8f3d7a9714fa, 0xea8f6cea898c53c2,
    0xaaa8e3aaaaa5556c, 0x38e3aaa8e38e38ea, 0x43813815633a31c1, 0x4e39204e3868063c,
    0xa8eaaaa8eaaa48f0, 0xf38ea8e38e3aa38e, 0xc43cf3cf4a03e004, 0x04f39204f38a8063,
    0xfa8ea8e38eaaa755, 0x813cf38e38f3ce3c, 0x6c33c13c17603e00, 0xb3cf39b3cf3871c7,
    0xaa3aaa8eaaa3aa6d, 0x14538e38e38eaaa3, 0x76c3a8f38579e387, 0x1c6c539b6c538b2c,
    0x40e3aaa903aa3aa7, 0xb1c741040e39038e, 0x476c33814077e740, 0x79b04f3de04f3c78,
    0xa3ce38ea8ea8e3aa, 0x610453cf38f3cf3a, 0x8476c33cf1457a61, 0xa7dc0453de0453cb,
    0xce14f38ea9038e3a, 0x16108714540f3c53, 0x10810403c11477e6, 0x8e04114e38114e38,
    0x38e38e38e38e38e3, 0x83885d63cf38f3ce, 0x8c1010403963d704, 0x38e30c1913811913,
    0x145145138e39144e, 0x2546582849244f3d, 0x4088880404684a03, 0x038e2011d04081d0,
    0x5040e41039038e39, 0x2245a41d61453851, 0x640d8880405965d7, 0x5038e34c1d64081d,
    0x1565915963903914, 0x03645a48685d7445, 0x453c20820405a85e, 0x38e3ce0411453c11,
    0xf3cf38e3ce3ce38f, 0xd72083c25d73cf3c, 0x1973c41020403963, 0x244e3ce30c1973c1,
    0x8f3d24514913ce39, 0x4a03654848204924, 0x81c5142882040468, 0x8f3903ce2011c514,
    0x3c514540e1503d03, 0x65d72245e21d7145, 0x481d714488204059, 0x3924503ce34c1d71,
    0x74851575915d63d0, 0xa85e03645e28605d, 0xa8f3eaa855c53c25, 0xaaaaaaaaaa3cf3ea,
    0xaaaaaaaaaaaaaaaa, 0xa8fa8f3d7a9714fa, 0xe38f3eaa855c53c2, 0x8e3aaaaaaaa3cf48,
    0x3aa38ea8e38eaaa3, 0x239b39b3d739719b, 0xcea8f6cea898c53c, 0xaaaa8e3aaaaa5556,
    0x138e3aaa8e38e38e, 0xc23813815633a31c, 0x78f38f6cea898c53, 0xe38e38e3aaaaa555,
    0xc13ce3cea8f3cf38, 0x3c43c13c15633e31, 0xf04e39204e386806, 0x8ea8eaaaa8eaaa48,
    0x04f38ea8e38e3aa3, 0x63c43cf3cf4a03e0, 0x8f21041204e38680, 0x38e3903aaa8eaaa4,
    0x021b40e39039040e, 0x063c415b15b4a016, 0x75504f39204f38a8, 0xe3cfa8ea8e38eaaa,
    0xe00813cf38e38f3c, 0x8063c43c13c17603, 0xa75520541204f38a, 0x4f3cf39038e38eaa,
    0x16008114f3d03851, 0x71c76c3141141760, 0xaa6db3cf39b3cf38, 0xaaa3aa3aaa8eaaa3,
    0xe38714538e38e38e, 0x871c76c3a8f38579, 0x3aa6db49245b3cf3, 0x138e3aa44e38eaaa,
    0x9e44718644e45139, 0x38b2c76c339b4467, 0xa3aa71c6c539b6c5, 0x9038e40e3aaa903a,
    0x7e740b1c741040e3, 0x538b2c76c3381407, 0xaa3aa71c79745b6c, 0x3963cf40e44e3903,
    0x77e758b1c7590591, 0x4f3c78476c33c158, 0xa8e3aa79b04f3de0, 0xf3cf3aa3ce38ea8e,
    0x457a61610453cf38, 0x04f3c78476c33cf1, 0xea8e3aa79b21249e, 0x523d240e3ce45038,
    0x5c67a65e120648f4, 0xe0453cb8476c315b, 0x9038e3aa7dc0453d, 0x40f3c53ce14f38ea,
    0x11477e6161087145, 0x9e0453cb8476c33c, 0x39038e3aa7dc2174, 0x55923d714f14f450,
    0x415c77e65e10875c, 0x38114e3810810401, 0xe38e38e38e04114e, 0xcf38f3ce38e38e38,
    0x3963d70483885d63, 0x34c114e381081040, 0xd34ce38e38e04125, 0x54f4d53d34d338e4,
    0x04e95630484c88e9, 0x9138119138c10104, 0x38e39144e38e30c1, 0x849244f3d1451451,
    0x404684a032546582, 0x2984c119138c1010, 0x14d34d144e38e30c, 0x287526153d861845,
    0x0406287603256258, 0x11d04081d0408888, 0x1039038e39038e20, 0x1d614538515040e4,
    0x80405965d72245a4, 0x012d45081d040888, 0x4104d44ce39038e2, 0x42e92454c9154513,
    0x880406696a322466, 0x34c1d64081d640d8, 0x159639039145038e, 0xa48685d744515659,
    0x8880405a85e03645, 0xe34c2d95081d640d, 0x585964d44d145038, 0x6648686976091596,
    0x20820406686a0364, 0xce0411453c11453c, 0x38e3ce3ce38f38e3, 0x83c25d73cf3cf3cf,
    0xc20820403963d720, 0x3ce0412495411453, 0x54d33ce5534cf38e, 0x085428e354f5553d,
    0x3c41020404e95632, 0xe3ce30c1973c1197, 0xd24514913ce39244, 0x36548482049248f3,
    0x73c41020404684a0, 0x4e3ce30c29a54119, 0x3dd6184915534d24, 0x0365744820752755,
    0xc514288204062876, 0x3903ce2011c51481, 0x514540e1503d038f, 0xd72245e21d71453c,
    0x1c51428820405965, 0xf3903ce2012c9248, 0x491495131505544c, 0x6a32246a22e32455,
    0x81d7144882040669, 0x924503ce34c1d714, 0x4851575915d63d03, 0x85e03645e28605d7,
    0x481d71448820405a, 0x4d24503ce34c2da2, 0x774915a6585d6554, 0x686a03646a286069,
    0x0000000000000006,
];

static DEGREE_2_TRANSPOSITION_BOUNDARY_OFFSETS: [u64; 125] = [
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x9000000000000000,
    0x0000024000000004, 0x0000000000000000, 0x0000000000010000, 0x0000000000000000,
    0x0000004000004100, 0x9240000000000400, 0x0000004900004820, 0x2490000410000080,
    0x0000001240001208, 0x0000000104000020, 0x0000000000000100, 0x80000c30004c0000,
    0x006c00030000006d, 0x4000030c001b0c06, 0x0010002010000012, 0x900000c200048201,
    0x4004c00834000006, 0x924924308001a080, 0x0800900124924004, 0x2492490412412410,
    0x0200240049249001, 0x4924924104904904, 0x0080090012492400, 0x1249249041241241,
    0x4020024004924900, 0x0100000010490490, 0x0000000000000010, 0x005000000c30004c,
    0x9201249001200005, 0xb61b600024900814, 0xdb0db61b0c00c001, 0x6d86d80006db0186,
    0xc6e36dc6c3123000, 0x1241240001c70061, 0x4924920104020100, 0x04904900000d2010,
    0x124924a45100a040, 0x01a41a4000244804, 0x06924926134c20d0, 0x006906900006d201,
    0x41a49249c4d30a34, 0x924924924925c480, 0x4924924924924924, 0x2492492492492492,
    0x9249249249249249, 0x4924924924924924, 0x2492492492492492, 0x9249249249249249,
    0x4924924924924924, 0x2492492492492492, 0x9249249249249249, 0x4924924924924924,
    0x2492492492492492, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492,
    0x9249249249249249, 0x0000001001000000, 0x0c30004c00000000, 0xda00000568400000,
    0x2bac0a13a2d16d02, 0x0048000140140000, 0x0924020524804924, 0x2db2000052850000,
    0x0249008149251249, 0xb0c00c001b61b600, 0x006db0186db0db61, 0x6eba030006d86d80,
    0x001b6c061b6eb6dd, 0x1b0c48c001b61b60, 0x00071c01871b8db7, 0xc6ebb230006d86d8,
    0x0001c70061c6e36d, 0x0104020100124124, 0x00000d2010492492, 0xad415a8040049049,
    0x40002b4804124924, 0x2914402810012412, 0x9000091201049249, 0x4a4515aa04004904,
    0xa400024480412492, 0x926134c20d001a41, 0x6900006d20106924, 0x249d4d3a83400690,
    0x1a40001b48041a49, 0x4927134c28d001a4, 0x0690000712010692, 0x9249c4d3aa340069,
    0x24924925c48041a4, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492,
    0x9249249249249249, 0x4924924924924924, 0x2492492492492492, 0x9249249249249249,
    0x4924924924924924, 0x2492492492492492, 0x9249249249249249, 0x4924924924924924,
    0x2492492492492492, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492,
    0x9249249249249249, 0x4924924924924924, 0x2492492492492492, 0x9249249249249249,
    0x4924924924924924, 0x2492492492492492, 0x9249249249249249, 0x4924924924924924,
    0x2492492492492492, 0x9249249249249249, 0x4924924924924924, 0x2492492492492492,
    0x9249249249249249, 0x4924924924924924, 0x2492492492492492, 0x9249249249249249,
    0x0000000000000000,
];

static DEGREE_2_TRANSPOSITION_FINAL_ADDENDUMS: [i32; 42] = [0, 1, 0, -1, -1, 0, -1, -1, 0, -2, -2, -2, -1, -1, 2, 1, 0, -1, -1, -2, -2, -2, -1, -1, -2, -2, -2, 0, -2, -2, -1, -2, -2, -2, -1, -2, -1, -1, -2, -2, -2, -2];

/// Degree 1, without transposition: 5 parametric states.
pub(crate) fn degree_1() -> ParametricDescription {
    ParametricDescription::from_static_parts(
        1,
        false,
        PackedArray::from_static(3, 75, &DEGREE_1_TRANSITIONS),
        PackedArray::from_static(2, 75, &DEGREE_1_BOUNDARY_OFFSETS),
        Cow::Borrowed(&DEGREE_1_FINAL_ADDENDUMS),
    )
}

/// Degree 1, with transposition: 6 parametric states.
pub(crate) fn degree_1_transposition() -> ParametricDescription {
    ParametricDescription::from_static_parts(
        1,
        true,
        PackedArray::from_static(3, 90, &DEGREE_1_TRANSPOSITION_TRANSITIONS),
        PackedArray::from_static(2, 90, &DEGREE_1_TRANSPOSITION_BOUNDARY_OFFSETS),
        Cow::Borrowed(&DEGREE_1_TRANSPOSITION_FINAL_ADDENDUMS),
    )
}

/// Degree 2, without transposition: 30 parametric states.
pub(crate) fn degree_2() -> ParametricDescription {
    ParametricDescription::from_static_parts(
        2,
        false,
        PackedArray::from_static(5, 1890, &DEGREE_2_TRANSITIONS),
        PackedArray::from_static(3, 1890, &DEGREE_2_BOUNDARY_OFFSETS),
        Cow::Borrowed(&DEGREE_2_FINAL_ADDENDUMS),
    )
}

/// Degree 2, with transposition: 42 parametric states.
pub(crate) fn degree_2_transposition() -> ParametricDescription {
    ParametricDescription::from_static_parts(
        2,
        true,
        PackedArray::from_static(6, 2646, &DEGREE_2_TRANSPOSITION_TRANSITIONS),
        PackedArray::from_static(3, 2646, &DEGREE_2_TRANSPOSITION_BOUNDARY_OFFSETS),
        Cow::Borrowed(&DEGREE_2_TRANSPOSITION_FINAL_ADDENDUMS),
    )
}

/// Every built-in bundle, in registry order.
pub(crate) fn all() -> [ParametricDescription; 4] {
    [
        degree_1(),
        degree_1_transposition(),
        degree_2(),
        degree_2_transposition(),
    ]
}
