//! Compiled lookup tables for (manifold) dual marching cubes.
//!
//! Generated by the `gentables` binary from [`crate::gentables`];
//! do not edit by hand.

/// Sentinel in [`PROBLEMATIC_CONFIGS`] for configurations without an
/// ambiguous face.
pub const NO_AMBIGUOUS_FACE: u8 = 255;

/// Up to four dual points per cube configuration, each encoded as a
/// 12-bit mask over the surface-crossing edges it owns. Unused entries
/// are zero.
pub static DUAL_POINTS_LIST: [[u16; 4]; 256] = [
    [0x000, 0x000, 0x000, 0x000], // 0
    [0x109, 0x000, 0x000, 0x000], // 1
    [0x203, 0x000, 0x000, 0x000], // 2
    [0x30a, 0x000, 0x000, 0x000], // 3
    [0x190, 0x000, 0x000, 0x000], // 4
    [0x099, 0x000, 0x000, 0x000], // 5
    [0x203, 0x190, 0x000, 0x000], // 6
    [0x29a, 0x000, 0x000, 0x000], // 7
    [0x230, 0x000, 0x000, 0x000], // 8
    [0x109, 0x230, 0x000, 0x000], // 9
    [0x033, 0x000, 0x000, 0x000], // 10
    [0x13a, 0x000, 0x000, 0x000], // 11
    [0x3a0, 0x000, 0x000, 0x000], // 12
    [0x2a9, 0x000, 0x000, 0x000], // 13
    [0x1a3, 0x000, 0x000, 0x000], // 14
    [0x0aa, 0x000, 0x000, 0x000], // 15
    [0x80c, 0x000, 0x000, 0x000], // 16
    [0x905, 0x000, 0x000, 0x000], // 17
    [0x203, 0x80c, 0x000, 0x000], // 18
    [0xb06, 0x000, 0x000, 0x000], // 19
    [0x190, 0x80c, 0x000, 0x000], // 20
    [0x895, 0x000, 0x000, 0x000], // 21
    [0x203, 0x190, 0x80c, 0x000], // 22
    [0xa96, 0x000, 0x000, 0x000], // 23
    [0x230, 0x80c, 0x000, 0x000], // 24
    [0x905, 0x230, 0x000, 0x000], // 25
    [0x033, 0x80c, 0x000, 0x000], // 26
    [0x936, 0x000, 0x000, 0x000], // 27
    [0x3a0, 0x80c, 0x000, 0x000], // 28
    [0xaa5, 0x000, 0x000, 0x000], // 29
    [0x1a3, 0x80c, 0x000, 0x000], // 30
    [0x8a6, 0x000, 0x000, 0x000], // 31
    [0x406, 0x000, 0x000, 0x000], // 32
    [0x109, 0x406, 0x000, 0x000], // 33
    [0x605, 0x000, 0x000, 0x000], // 34
    [0x70c, 0x000, 0x000, 0x000], // 35
    [0x190, 0x406, 0x000, 0x000], // 36
    [0x099, 0x406, 0x000, 0x000], // 37
    [0x605, 0x190, 0x000, 0x000], // 38
    [0x69c, 0x000, 0x000, 0x000], // 39
    [0x230, 0x406, 0x000, 0x000], // 40
    [0x109, 0x230, 0x406, 0x000], // 41
    [0x435, 0x000, 0x000, 0x000], // 42
    [0x53c, 0x000, 0x000, 0x000], // 43
    [0x3a0, 0x406, 0x000, 0x000], // 44
    [0x2a9, 0x406, 0x000, 0x000], // 45
    [0x5a5, 0x000, 0x000, 0x000], // 46
    [0x4ac, 0x000, 0x000, 0x000], // 47
    [0xc0a, 0x000, 0x000, 0x000], // 48
    [0xd03, 0x000, 0x000, 0x000], // 49
    [0xe09, 0x000, 0x000, 0x000], // 50
    [0xf00, 0x000, 0x000, 0x000], // 51
    [0x190, 0xc0a, 0x000, 0x000], // 52
    [0xc93, 0x000, 0x000, 0x000], // 53
    [0xe09, 0x190, 0x000, 0x000], // 54
    [0xe90, 0x000, 0x000, 0x000], // 55
    [0x230, 0xc0a, 0x000, 0x000], // 56
    [0xd03, 0x230, 0x000, 0x000], // 57
    [0xc39, 0x000, 0x000, 0x000], // 58
    [0xd30, 0x000, 0x000, 0x000], // 59
    [0x3a0, 0xc0a, 0x000, 0x000], // 60
    [0xea3, 0x000, 0x000, 0x000], // 61
    [0xda9, 0x000, 0x000, 0x000], // 62
    [0xca0, 0x000, 0x000, 0x000], // 63
    [0x8c0, 0x000, 0x000, 0x000], // 64
    [0x109, 0x8c0, 0x000, 0x000], // 65
    [0x203, 0x8c0, 0x000, 0x000], // 66
    [0x30a, 0x8c0, 0x000, 0x000], // 67
    [0x950, 0x000, 0x000, 0x000], // 68
    [0x859, 0x000, 0x000, 0x000], // 69
    [0x203, 0x950, 0x000, 0x000], // 70
    [0xa5a, 0x000, 0x000, 0x000], // 71
    [0x230, 0x8c0, 0x000, 0x000], // 72
    [0x109, 0x230, 0x8c0, 0x000], // 73
    [0x033, 0x8c0, 0x000, 0x000], // 74
    [0x13a, 0x8c0, 0x000, 0x000], // 75
    [0xb60, 0x000, 0x000, 0x000], // 76
    [0xa69, 0x000, 0x000, 0x000], // 77
    [0x963, 0x000, 0x000, 0x000], // 78
    [0x86a, 0x000, 0x000, 0x000], // 79
    [0x0cc, 0x000, 0x000, 0x000], // 80
    [0x1c5, 0x000, 0x000, 0x000], // 81
    [0x203, 0x0cc, 0x000, 0x000], // 82
    [0x3c6, 0x000, 0x000, 0x000], // 83
    [0x15c, 0x000, 0x000, 0x000], // 84
    [0x055, 0x000, 0x000, 0x000], // 85
    [0x203, 0x15c, 0x000, 0x000], // 86
    [0x256, 0x000, 0x000, 0x000], // 87
    [0x230, 0x0cc, 0x000, 0x000], // 88
    [0x1c5, 0x230, 0x000, 0x000], // 89
    [0x033, 0x0cc, 0x000, 0x000], // 90
    [0x1f6, 0x000, 0x000, 0x000], // 91
    [0x36c, 0x000, 0x000, 0x000], // 92
    [0x265, 0x000, 0x000, 0x000], // 93
    [0x16f, 0x000, 0x000, 0x000], // 94
    [0x066, 0x000, 0x000, 0x000], // 95
    [0x406, 0x8c0, 0x000, 0x000], // 96
    [0x109, 0x406, 0x8c0, 0x000], // 97
    [0x605, 0x8c0, 0x000, 0x000], // 98
    [0x70c, 0x8c0, 0x000, 0x000], // 99
    [0x950, 0x406, 0x000, 0x000], // 100
    [0x859, 0x406, 0x000, 0x000], // 101
    [0x605, 0x950, 0x000, 0x000], // 102
    [0xe5c, 0x000, 0x000, 0x000], // 103
    [0x230, 0x406, 0x8c0, 0x000], // 104
    [0x109, 0x230, 0x406, 0x8c0], // 105
    [0x435, 0x8c0, 0x000, 0x000], // 106
    [0x53c, 0x8c0, 0x000, 0x000], // 107
    [0xb60, 0x406, 0x000, 0x000], // 108
    [0xa69, 0x406, 0x000, 0x000], // 109
    [0xd65, 0x000, 0x000, 0x000], // 110
    [0xc6c, 0x000, 0x000, 0x000], // 111
    [0x4ca, 0x000, 0x000, 0x000], // 112
    [0x5c3, 0x000, 0x000, 0x000], // 113
    [0x6c9, 0x000, 0x000, 0x000], // 114
    [0x7c0, 0x000, 0x000, 0x000], // 115
    [0x55a, 0x000, 0x000, 0x000], // 116
    [0x453, 0x000, 0x000, 0x000], // 117
    [0x759, 0x000, 0x000, 0x000], // 118
    [0x650, 0x000, 0x000, 0x000], // 119
    [0x230, 0x4ca, 0x000, 0x000], // 120
    [0x5c3, 0x230, 0x000, 0x000], // 121
    [0x4f9, 0x000, 0x000, 0x000], // 122
    [0x5f0, 0x000, 0x000, 0x000], // 123
    [0x76a, 0x000, 0x000, 0x000], // 124
    [0x663, 0x000, 0x000, 0x000], // 125
    [0x109, 0x460, 0x000, 0x000], // 126
    [0x460, 0x000, 0x000, 0x000], // 127
    [0x460, 0x000, 0x000, 0x000], // 128
    [0x109, 0x460, 0x000, 0x000], // 129
    [0x203, 0x460, 0x000, 0x000], // 130
    [0x30a, 0x460, 0x000, 0x000], // 131
    [0x190, 0x460, 0x000, 0x000], // 132
    [0x099, 0x460, 0x000, 0x000], // 133
    [0x203, 0x190, 0x460, 0x000], // 134
    [0x29a, 0x460, 0x000, 0x000], // 135
    [0x650, 0x000, 0x000, 0x000], // 136
    [0x109, 0x650, 0x000, 0x000], // 137
    [0x453, 0x000, 0x000, 0x000], // 138
    [0x55a, 0x000, 0x000, 0x000], // 139
    [0x7c0, 0x000, 0x000, 0x000], // 140
    [0x6c9, 0x000, 0x000, 0x000], // 141
    [0x5c3, 0x000, 0x000, 0x000], // 142
    [0x4ca, 0x000, 0x000, 0x000], // 143
    [0x80c, 0x460, 0x000, 0x000], // 144
    [0x905, 0x460, 0x000, 0x000], // 145
    [0x203, 0x80c, 0x460, 0x000], // 146
    [0xb06, 0x460, 0x000, 0x000], // 147
    [0x190, 0x80c, 0x460, 0x000], // 148
    [0x895, 0x460, 0x000, 0x000], // 149
    [0x203, 0x190, 0x80c, 0x460], // 150
    [0xa96, 0x460, 0x000, 0x000], // 151
    [0x650, 0x80c, 0x000, 0x000], // 152
    [0x905, 0x650, 0x000, 0x000], // 153
    [0x453, 0x80c, 0x000, 0x000], // 154
    [0xd56, 0x000, 0x000, 0x000], // 155
    [0x7c0, 0x80c, 0x000, 0x000], // 156
    [0xec5, 0x000, 0x000, 0x000], // 157
    [0x5c3, 0x80c, 0x000, 0x000], // 158
    [0xcc6, 0x000, 0x000, 0x000], // 159
    [0x066, 0x000, 0x000, 0x000], // 160
    [0x109, 0x066, 0x000, 0x000], // 161
    [0x265, 0x000, 0x000, 0x000], // 162
    [0x36c, 0x000, 0x000, 0x000], // 163
    [0x190, 0x066, 0x000, 0x000], // 164
    [0x099, 0x066, 0x000, 0x000], // 165
    [0x265, 0x190, 0x000, 0x000], // 166
    [0x2fc, 0x000, 0x000, 0x000], // 167
    [0x256, 0x000, 0x000, 0x000], // 168
    [0x109, 0x256, 0x000, 0x000], // 169
    [0x055, 0x000, 0x000, 0x000], // 170
    [0x15c, 0x000, 0x000, 0x000], // 171
    [0x3c6, 0x000, 0x000, 0x000], // 172
    [0x2cf, 0x000, 0x000, 0x000], // 173
    [0x1c5, 0x000, 0x000, 0x000], // 174
    [0x0cc, 0x000, 0x000, 0x000], // 175
    [0x86a, 0x000, 0x000, 0x000], // 176
    [0x963, 0x000, 0x000, 0x000], // 177
    [0xa69, 0x000, 0x000, 0x000], // 178
    [0xb60, 0x000, 0x000, 0x000], // 179
    [0x190, 0x86a, 0x000, 0x000], // 180
    [0x8f3, 0x000, 0x000, 0x000], // 181
    [0xa69, 0x190, 0x000, 0x000], // 182
    [0xaf0, 0x000, 0x000, 0x000], // 183
    [0xa5a, 0x000, 0x000, 0x000], // 184
    [0xb53, 0x000, 0x000, 0x000], // 185
    [0x859, 0x000, 0x000, 0x000], // 186
    [0x950, 0x000, 0x000, 0x000], // 187
    [0xbca, 0x000, 0x000, 0x000], // 188
    [0x203, 0x8c0, 0x000, 0x000], // 189
    [0x9c9, 0x000, 0x000, 0x000], // 190
    [0x8c0, 0x000, 0x000, 0x000], // 191
    [0xca0, 0x000, 0x000, 0x000], // 192
    [0x109, 0xca0, 0x000, 0x000], // 193
    [0x203, 0xca0, 0x000, 0x000], // 194
    [0x30a, 0xca0, 0x000, 0x000], // 195
    [0xd30, 0x000, 0x000, 0x000], // 196
    [0xc39, 0x000, 0x000, 0x000], // 197
    [0x203, 0xd30, 0x000, 0x000], // 198
    [0xe3a, 0x000, 0x000, 0x000], // 199
    [0xe90, 0x000, 0x000, 0x000], // 200
    [0x109, 0xe90, 0x000, 0x000], // 201
    [0xc93, 0x000, 0x000, 0x000], // 202
    [0xd9a, 0x000, 0x000, 0x000], // 203
    [0xf00, 0x000, 0x000, 0x000], // 204
    [0xe09, 0x000, 0x000, 0x000], // 205
    [0xd03, 0x000, 0x000, 0x000], // 206
    [0xc0a, 0x000, 0x000, 0x000], // 207
    [0x4ac, 0x000, 0x000, 0x000], // 208
    [0x5a5, 0x000, 0x000, 0x000], // 209
    [0x203, 0x4ac, 0x000, 0x000], // 210
    [0x7a6, 0x000, 0x000, 0x000], // 211
    [0x53c, 0x000, 0x000, 0x000], // 212
    [0x435, 0x000, 0x000, 0x000], // 213
    [0x203, 0x53c, 0x000, 0x000], // 214
    [0x636, 0x000, 0x000, 0x000], // 215
    [0x69c, 0x000, 0x000, 0x000], // 216
    [0x795, 0x000, 0x000, 0x000], // 217
    [0x49f, 0x000, 0x000, 0x000], // 218
    [0x190, 0x406, 0x000, 0x000], // 219
    [0x70c, 0x000, 0x000, 0x000], // 220
    [0x605, 0x000, 0x000, 0x000], // 221
    [0x50f, 0x000, 0x000, 0x000], // 222
    [0x406, 0x000, 0x000, 0x000], // 223
    [0x8a6, 0x000, 0x000, 0x000], // 224
    [0x109, 0x8a6, 0x000, 0x000], // 225
    [0xaa5, 0x000, 0x000, 0x000], // 226
    [0xbac, 0x000, 0x000, 0x000], // 227
    [0x936, 0x000, 0x000, 0x000], // 228
    [0x83f, 0x000, 0x000, 0x000], // 229
    [0xb35, 0x000, 0x000, 0x000], // 230
    [0x230, 0x80c, 0x000, 0x000], // 231
    [0xa96, 0x000, 0x000, 0x000], // 232
    [0x109, 0xa96, 0x000, 0x000], // 233
    [0x895, 0x000, 0x000, 0x000], // 234
    [0x99c, 0x000, 0x000, 0x000], // 235
    [0xb06, 0x000, 0x000, 0x000], // 236
    [0xa0f, 0x000, 0x000, 0x000], // 237
    [0x905, 0x000, 0x000, 0x000], // 238
    [0x80c, 0x000, 0x000, 0x000], // 239
    [0x0aa, 0x000, 0x000, 0x000], // 240
    [0x1a3, 0x000, 0x000, 0x000], // 241
    [0x2a9, 0x000, 0x000, 0x000], // 242
    [0x3a0, 0x000, 0x000, 0x000], // 243
    [0x13a, 0x000, 0x000, 0x000], // 244
    [0x033, 0x000, 0x000, 0x000], // 245
    [0x339, 0x000, 0x000, 0x000], // 246
    [0x230, 0x000, 0x000, 0x000], // 247
    [0x29a, 0x000, 0x000, 0x000], // 248
    [0x393, 0x000, 0x000, 0x000], // 249
    [0x099, 0x000, 0x000, 0x000], // 250
    [0x190, 0x000, 0x000, 0x000], // 251
    [0x30a, 0x000, 0x000, 0x000], // 252
    [0x203, 0x000, 0x000, 0x000], // 253
    [0x109, 0x000, 0x000, 0x000], // 254
    [0x000, 0x000, 0x000, 0x000], // 255
];

/// Direction of the single ambiguous face for the rotations of the two
/// problematic cube classes ({-x,+x,-y,+y,-z,+z} = 0..6), or
/// [`NO_AMBIGUOUS_FACE`] everywhere else.
pub static PROBLEMATIC_CONFIGS: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, // 0..=15
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, // 16..=31
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, // 32..=47
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,   1,   0, 255, // 48..=63
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, // 64..=79
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,   3, 255, 255,   2, 255, // 80..=95
    255, 255, 255, 255, 255, 255, 255,   5, 255, 255, 255, 255, 255, 255,   5,   5, // 96..=111
    255, 255, 255, 255, 255, 255,   4, 255, 255, 255,   3,   3,   1,   1, 255, 255, // 112..=127
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, // 128..=143
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,   5, 255,   5, 255,   5, // 144..=159
    255, 255, 255, 255, 255, 255, 255,   3, 255, 255, 255, 255, 255,   2, 255, 255, // 160..=175
    255, 255, 255, 255, 255,   3, 255,   3, 255,   4, 255, 255,   0, 255,   0, 255, // 176..=191
    255, 255, 255, 255, 255, 255, 255,   1, 255, 255, 255,   0, 255, 255, 255, 255, // 192..=207
    255, 255, 255,   1, 255, 255, 255,   1, 255,   4,   2, 255, 255, 255,   2, 255, // 208..=223
    255, 255, 255,   0, 255,   2,   4, 255, 255, 255, 255,   0, 255,   2, 255, 255, // 224..=239
    255, 255, 255, 255, 255, 255,   4, 255, 255,   4, 255, 255, 255, 255, 255, 255, // 240..=255
];
