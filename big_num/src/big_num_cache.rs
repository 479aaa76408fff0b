use lazy_static::*;

use crate::BigUnsigned;
use crate::big_num_constants::*;

lazy_static! {
    // digits are stored least-significant first
    pub static ref SMALL_CACHE: [BigUnsigned; MAX_CONSTANT + 1] = [
        BigUnsigned::from_raw(vec![0]   ),
        BigUnsigned::from_raw(vec![1]   ),
        BigUnsigned::from_raw(vec![2]   ),
        BigUnsigned::from_raw(vec![3]   ),
        BigUnsigned::from_raw(vec![4]   ),
        BigUnsigned::from_raw(vec![5]   ),
        BigUnsigned::from_raw(vec![6]   ),
        BigUnsigned::from_raw(vec![7]   ),
        BigUnsigned::from_raw(vec![8]   ),
        BigUnsigned::from_raw(vec![9]   ),
        BigUnsigned::from_raw(vec![0, 1]),
        BigUnsigned::from_raw(vec![1, 1]),
        BigUnsigned::from_raw(vec![2, 1]),
        BigUnsigned::from_raw(vec![3, 1]),
        BigUnsigned::from_raw(vec![4, 1]),
        BigUnsigned::from_raw(vec![5, 1]),
        BigUnsigned::from_raw(vec![6, 1]),
    ];
}

#[test]
fn test_small_cache() {
    for (i, cached) in SMALL_CACHE.iter().enumerate() {
        assert_eq!(cached.to_string(), i.to_string());
    }
}
