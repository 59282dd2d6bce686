use crate::verify::Reason;

/// A mutation of [`BIRTHDAY_SOLUTION`] and the rejection it must produce.
/// Every entry is validated against [`BIRTHDAY_INPUT`] and [`BIRTHDAY_NONCE`].
///
/// [`BIRTHDAY_SOLUTION`]: super::BIRTHDAY_SOLUTION
/// [`BIRTHDAY_INPUT`]: super::BIRTHDAY_INPUT
/// [`BIRTHDAY_NONCE`]: super::BIRTHDAY_NONCE
pub(crate) struct InvalidVector {
    pub(crate) solution: &'static [u32],
    pub(crate) reason: Reason,
}

pub(crate) const INVALID_TEST_VECTORS: &[InvalidVector] = &[
    // Change one index
    InvalidVector {
        solution: &[
            2262, 15185, 36112, 104243, 23779, 118390, 118332, 130041, 32642, 69878, 76925, 80080,
            45858, 116805, 92842, 111026, 15972, 115059, 85191, 90330, 68190, 122819, 81830,
            91132, 23460, 49807, 52426, 80391, 69567, 114474, 104973, 122568,
        ],
        reason: Reason::Collision,
    },
    // Swap two arbitrary indices
    InvalidVector {
        solution: &[
            45858, 15185, 36112, 104243, 23779, 118390, 118332, 130041, 32642, 69878, 76925,
            80080, 2261, 116805, 92842, 111026, 15972, 115059, 85191, 90330, 68190, 122819, 81830,
            91132, 23460, 49807, 52426, 80391, 69567, 114474, 104973, 122568,
        ],
        reason: Reason::Collision,
    },
    // Reverse the first pair of indices
    InvalidVector {
        solution: &[
            15185, 2261, 36112, 104243, 23779, 118390, 118332, 130041, 32642, 69878, 76925, 80080,
            45858, 116805, 92842, 111026, 15972, 115059, 85191, 90330, 68190, 122819, 81830,
            91132, 23460, 49807, 52426, 80391, 69567, 114474, 104973, 122568,
        ],
        reason: Reason::IndexOrder,
    },
    // Swap the first and second pairs of indices
    InvalidVector {
        solution: &[
            36112, 104243, 2261, 15185, 23779, 118390, 118332, 130041, 32642, 69878, 76925, 80080,
            45858, 116805, 92842, 111026, 15972, 115059, 85191, 90330, 68190, 122819, 81830,
            91132, 23460, 49807, 52426, 80391, 69567, 114474, 104973, 122568,
        ],
        reason: Reason::IndexOrder,
    },
    // Swap the second-to-last and last pairs of indices
    InvalidVector {
        solution: &[
            2261, 15185, 36112, 104243, 23779, 118390, 118332, 130041, 32642, 69878, 76925, 80080,
            45858, 116805, 92842, 111026, 15972, 115059, 85191, 90330, 68190, 122819, 81830,
            91132, 23460, 49807, 52426, 80391, 104973, 122568, 69567, 114474,
        ],
        reason: Reason::IndexOrder,
    },
    // Swap the first half and second half
    InvalidVector {
        solution: &[
            15972, 115059, 85191, 90330, 68190, 122819, 81830, 91132, 23460, 49807, 52426, 80391,
            69567, 114474, 104973, 122568, 2261, 15185, 36112, 104243, 23779, 118390, 118332,
            130041, 32642, 69878, 76925, 80080, 45858, 116805, 92842, 111026,
        ],
        reason: Reason::IndexOrder,
    },
    // Sort the indices
    InvalidVector {
        solution: &[
            2261, 15185, 15972, 23460, 23779, 32642, 36112, 45858, 49807, 52426, 68190, 69567,
            69878, 76925, 80080, 80391, 81830, 85191, 90330, 91132, 92842, 104243, 104973, 111026,
            114474, 115059, 116805, 118332, 118390, 122568, 122819, 130041,
        ],
        reason: Reason::Collision,
    },
    // Duplicate every index of the first half, in place
    InvalidVector {
        solution: &[
            2261, 2261, 15185, 15185, 36112, 36112, 104243, 104243, 23779, 23779, 118390, 118390,
            118332, 118332, 130041, 130041, 32642, 32642, 69878, 69878, 76925, 76925, 80080,
            80080, 45858, 45858, 116805, 116805, 92842, 92842, 111026, 111026,
        ],
        reason: Reason::DuplicateIndices,
    },
    // Duplicate the first half wholesale
    InvalidVector {
        solution: &[
            2261, 15185, 36112, 104243, 23779, 118390, 118332, 130041, 32642, 69878, 76925, 80080,
            45858, 116805, 92842, 111026, 2261, 15185, 36112, 104243, 23779, 118390, 118332,
            130041, 32642, 69878, 76925, 80080, 45858, 116805, 92842, 111026,
        ],
        reason: Reason::DuplicateIndices,
    },
];
