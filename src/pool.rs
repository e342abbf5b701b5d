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

#[derive(Copy, Clone, Default)]
struct PoolItem {
    id: Option<Id>,
    last_update: u64,
}

/// Fixed-capacity map from [`Id`] to slot index with least-recently-used eviction.
///
/// The pool only tracks identities and recency; the owner keeps the payload in a parallel
/// array indexed by slot and resets it whenever [`Pool::init`] hands out a slot.
#[derive(Clone)]
pub struct Pool {
    items: Vec<PoolItem>,
    clock: u64,
}

impl Pool {
    /// Creates an empty pool with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "pool capacity must be positive");
        Self { items: vec![PoolItem::default(); capacity], clock: 0 }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize { self.items.len() }

    /// Number of live entries.
    pub fn len(&self) -> usize { self.items.iter().filter(|item| item.id.is_some()).count() }

    /// Returns `true` if no slot is in use.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the slot holding `id`, if any.
    pub fn get(&self, id: Id) -> Option<usize> { self.items.iter().position(|item| item.id == Some(id)) }

    /// Returns the identity stored in `slot`.
    pub fn id_at(&self, slot: usize) -> Option<Id> { self.items.get(slot).and_then(|item| item.id) }

    /// Iterates over the live identities.
    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ { self.items.iter().filter_map(|item| item.id) }

    /// Assigns a slot to `id`, evicting the least recently touched entry when the pool is full.
    pub fn init(&mut self, id: Id) -> usize {
        if let Some(slot) = self.get(id) {
            self.touch(slot);
            return slot;
        }

        let mut slot = 0;
        for (i, item) in self.items.iter().enumerate() {
            if item.last_update < self.items[slot].last_update {
                slot = i;
            }
        }

        if let Some(evicted) = self.items[slot].id {
            log::debug!("pool slot {} evicted {:?}", slot, evicted);
        }
        self.items[slot].id = Some(id);
        self.touch(slot);
        slot
    }

    /// Marks `slot` as the most recently used.
    pub fn touch(&mut self, slot: usize) {
        self.clock += 1;
        self.items[slot].last_update = self.clock;
    }

    /// Releases `slot` so it is reused before any live entry.
    pub fn clear(&mut self, slot: usize) { self.items[slot] = PoolItem::default(); }
}
