use std::fmt;

/// Substitution arguments of a single log call: exactly one or exactly two.
///
/// Values are borrowed and handed to the engine untouched.
#[derive(Clone, Copy)]
pub enum Args<'a> {
    One(&'a dyn fmt::Display),
    Two(&'a dyn fmt::Display, &'a dyn fmt::Display),
}

impl<'a> Args<'a> {
    pub fn len(&self) -> usize {
        match self {
            Args::One(_) => 1,
            Args::Two(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&'a dyn fmt::Display> {
        match (*self, index) {
            (Args::One(a), 0) | (Args::Two(a, _), 0) => Some(a),
            (Args::Two(_, b), 1) => Some(b),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a dyn fmt::Display> {
        let args = *self;
        (0..args.len()).filter_map(move |i| args.get(i))
    }
}

impl fmt::Debug for Args<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for arg in self.iter() {
            list.entry(&format_args!("{}", arg));
        }
        list.finish()
    }
}

/// Call-site conversion into [`Args`]: a reference is one argument, a pair
/// of references is two.
pub trait IntoArgs<'a> {
    fn into_args(self) -> Args<'a>;
}

impl<'a> IntoArgs<'a> for Args<'a> {
    fn into_args(self) -> Args<'a> {
        self
    }
}

impl<'a, T> IntoArgs<'a> for &'a T
where
    T: fmt::Display,
{
    fn into_args(self) -> Args<'a> {
        Args::One(self)
    }
}

impl<'a, A, B> IntoArgs<'a> for (&'a A, &'a B)
where
    A: fmt::Display,
    B: fmt::Display,
{
    fn into_args(self) -> Args<'a> {
        Args::Two(self.0, self.1)
    }
}
