//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
use super::*;
use std::borrow::Cow;

/// FNV-1a 64-bit offset basis, also the scope of ids computed with an empty id stack.
pub(crate) const HASH_INITIAL: u64 = 14695981039346656037;
const FNV_PRIME: u64 = 1099511628211;

pub(crate) fn fnv1a(init: u64, data: &[u8]) -> u64 {
    let mut hash = init;
    for byte in data {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Caller-supplied key that identifies one widget occurrence inside the current id scope.
///
/// Two widgets declared with the same key in the same scope share their state.
pub trait IdSource {
    /// Bytes hashed into the widget id.
    fn id_bytes(&self) -> Cow<'_, [u8]>;
}

impl IdSource for str {
    fn id_bytes(&self) -> Cow<'_, [u8]> { Cow::Borrowed(self.as_bytes()) }
}

impl IdSource for String {
    fn id_bytes(&self) -> Cow<'_, [u8]> { Cow::Borrowed(self.as_bytes()) }
}

impl IdSource for [u8] {
    fn id_bytes(&self) -> Cow<'_, [u8]> { Cow::Borrowed(self) }
}

macro_rules! int_id_source {
    ($($ty:ty),*) => {
        $(
            impl IdSource for $ty {
                fn id_bytes(&self) -> Cow<'_, [u8]> { Cow::Owned(self.to_le_bytes().to_vec()) }
            }
        )*
    };
}

int_id_source!(u32, u64, usize, i32, i64);

impl<T: IdSource + ?Sized> IdSource for &T {
    fn id_bytes(&self) -> Cow<'_, [u8]> { (**self).id_bytes() }
}

#[derive(Clone, Default)]
pub(crate) struct IdManager {
    id_stack: Vec<Id>,
    last_id: Option<Id>,
}

impl IdManager {
    /// Scope new ids are derived from.
    pub fn scope(&self) -> Id {
        match self.id_stack.last() {
            Some(id) => *id,
            None => Id::new(HASH_INITIAL),
        }
    }

    pub fn get_id(&mut self, bytes: &[u8]) -> Id {
        let res = self.scope().derive(bytes);
        self.last_id = Some(res);
        res
    }

    pub fn push(&mut self, id: Id) { self.id_stack.push(id); }

    pub fn pop(&mut self) -> Option<Id> { self.id_stack.pop() }

    pub fn depth(&self) -> usize { self.id_stack.len() }

    pub fn last_id(&self) -> Option<Id> { self.last_id }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(fnv1a(HASH_INITIAL, b""), 0xcbf29ce484222325);
        assert_eq!(fnv1a(HASH_INITIAL, b"a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv1a(HASH_INITIAL, b"foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn ids_are_deterministic() {
        let mut a = IdManager::default();
        let mut b = IdManager::default();
        assert_eq!(a.get_id(b"button"), b.get_id(b"button"));
        assert_eq!(a.get_id(b"button"), Id::from_str("button"));
        assert_eq!(a.last_id(), Some(Id::from_str("button")));
    }

    #[test]
    fn single_byte_change_changes_id() {
        let mut ids = IdManager::default();
        let a = ids.get_id(b"slider0");
        let b = ids.get_id(b"slider1");
        assert_ne!(a, b);
    }

    #[test]
    fn scope_order_matters() {
        let mut ids = IdManager::default();
        let a = ids.get_id(b"A");
        ids.push(a);
        let ab = ids.get_id(b"B");
        ids.push(ab);
        let leaf_ab = ids.get_id(b"leaf");
        ids.pop();
        ids.pop();

        let b = ids.get_id(b"B");
        ids.push(b);
        let ba = ids.get_id(b"A");
        ids.push(ba);
        let leaf_ba = ids.get_id(b"leaf");
        ids.pop();
        ids.pop();

        assert_ne!(ab, ba);
        assert_ne!(leaf_ab, leaf_ba);
        assert_eq!(ids.depth(), 0);
    }

    #[test]
    fn pop_restores_scope() {
        let mut ids = IdManager::default();
        let outside = ids.get_id(b"x");
        let scope = ids.get_id(b"window");
        ids.push(scope);
        let inside = ids.get_id(b"x");
        ids.pop();
        assert_ne!(outside, inside);
        assert_eq!(ids.get_id(b"x"), outside);
        assert_eq!(inside, scope.derive(b"x"));
    }

    #[test]
    fn integer_keys_hash_their_bytes() {
        assert_eq!(7u32.id_bytes().as_ref(), &[7, 0, 0, 0]);
        assert_eq!("ab".id_bytes().as_ref(), b"ab");
    }
}
