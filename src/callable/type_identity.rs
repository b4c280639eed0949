// SPDX-License-Identifier: GPL-3.0-or-later

use core::fmt;
use std::any::{type_name, TypeId};

/// What we can learn about the type of a value at runtime: the name the
/// compiler gives it and its [TypeId].
///
/// Names produced by [type_name] are only meant for diagnostics and their
/// exact format may change between compiler releases. They are however fixed
/// for the lifetime of a process which is all a fingerprint needs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TypeIdentity {
    name: &'static str,
    id: TypeId,
}

impl TypeIdentity {
    /// Return the identity of type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeIdentity {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Return the identity of the type of the given value.
    pub fn of_val<T: ?Sized + 'static>(_: &T) -> Self {
        Self::of::<T>()
    }

    /// Return the type name as reported by the compiler.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the [TypeId].
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Return the name of the type this one refers to, looking through
    /// references, raw pointers and the standard `Box`, `Rc` and `Arc` smart
    /// pointers; e.g. `my::Handler` for `&alloc::sync::Arc<my::Handler>`.
    pub fn target_name(&self) -> &'static str {
        let mut s = self.name;
        while let Some(x) = peel_reference(s).or_else(|| peel_smart_pointer(s)) {
            s = x;
        }
        s
    }

    /// Return TRUE if this is a compiler-generated type w/o a path of its own
    /// such as the type of a closure or of an `async` block, or a type
    /// parametrized by one.
    ///
    /// Note that items declared inside a closure's body inherit its
    /// `{{closure}}` path segment and count as unnamed too. A fn item declared
    /// there is thus seen as a closure and its token will differ from that of
    /// the string spelling of its path.
    pub fn is_unnamed(&self) -> bool {
        self.name.contains('{')
    }

    /// Return TRUE if the concrete type is hidden behind a trait object,
    /// whether directly (`dyn Any`), behind a reference (`&dyn Any`) or as a
    /// type argument (`Box<dyn Any>`).
    pub fn is_erased(&self) -> bool {
        self.name.match_indices("dyn ").any(|(i, _)| {
            self.name[..i]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_alphanumeric() && c != '_')
        })
    }

    /// Return TRUE if this is a function pointer type, or a reference to one.
    /// Pointers carry a signature but not the name of the function they point
    /// to.
    pub fn is_fn_pointer(&self) -> bool {
        let target = self.target_name();
        ["fn(", "unsafe ", "extern ", "for<"]
            .iter()
            .any(|x| target.starts_with(x))
    }

    /// Return a label synthesized for an unnamed type. It combines the
    /// compiler's name w/ a hash of the [TypeId] so that two closures defined
    /// in the same function, which share a name, still get different labels.
    ///
    /// The label is only meaningful within the running process.
    pub fn anonymous_label(&self) -> String {
        format!("{}@{:016x}", self.name, fxhash::hash64(&self.id))
    }
}

// strip one leading `&`, `&'a `, `&mut `, `*const ` or `*mut `.
fn peel_reference(s: &str) -> Option<&str> {
    let rest = s
        .strip_prefix("*const ")
        .or_else(|| s.strip_prefix("*mut "))
        .or_else(|| s.strip_prefix('&'))?;
    let rest = match rest.strip_prefix('\'') {
        Some(x) => x.split_once(' ').map_or(rest, |(_, t)| t),
        None => rest,
    };
    Some(rest.strip_prefix("mut ").unwrap_or(rest))
}

const SMART_POINTERS: [&str; 3] = ["alloc::boxed::Box<", "alloc::rc::Rc<", "alloc::sync::Arc<"];

// strip one smart pointer w/ a single type argument; `Box<T, A>` is left as is.
fn peel_smart_pointer(s: &str) -> Option<&str> {
    let inner = SMART_POINTERS
        .iter()
        .find_map(|p| s.strip_prefix(p))?
        .strip_suffix('>')?;
    let mut depth = 0_i32;
    let mut prev = ' ';
    for c in inner.chars() {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' => depth -= 1,
            ',' if depth == 0 => return None,
            _ => {}
        }
        if depth < 0 {
            return None;
        }
        prev = c;
    }
    (depth == 0).then_some(inner)
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
