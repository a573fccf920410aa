#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;

use index_deque::IndexDeque;

fuzz_target!(|data: &[u8]| {
    let Some((&limit, ops)) = data.split_first() else {
        return;
    };

    let mut deque = IndexDeque::for_vec_with_limit(Vec::new(), usize::from(limit));
    let mut model = VecDeque::new();

    for (n, &op) in ops.iter().enumerate() {
        match op % 4 {
            0 => {
                if let Ok(i) = deque.push_head() {
                    deque.grower_mut()[i] = n;
                    model.push_front(n);
                }
            }
            1 => {
                if let Ok(i) = deque.push_tail() {
                    deque.grower_mut()[i] = n;
                    model.push_back(n);
                }
            }
            2 => {
                let got = deque.pop_head().map(|i| deque.grower()[i]);
                assert_eq!(got, model.pop_front());
            }
            _ => {
                let got = deque.pop_tail().map(|i| deque.grower()[i]);
                assert_eq!(got, model.pop_back());
            }
        }

        assert_eq!(deque.len(), model.len());
        assert!(deque.len() <= deque.capacity());
        assert_eq!(deque.capacity(), deque.grower().len());
    }
});
