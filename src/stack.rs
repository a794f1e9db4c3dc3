use crate::prelude::*;

/// Bounded LIFO stack. The vec's tail is the top, so push and pop never
/// shift anything.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stack<T> {
    nodes: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn seeded(values: impl IntoIterator<Item = T>, capacity: usize) -> IResult<Self> {
        let mut stack = Self::new(capacity);
        for value in values {
            stack.push(value)?;
        }
        Ok(stack)
    }

    pub fn push(&mut self, value: T) -> IResult<()> {
        if self.is_full() {
            return Err(Error::Overflow(self.capacity));
        }
        self.nodes.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> IResult<T> {
        self.nodes.pop().ok_or(Error::Underflow)
    }

    /// Look at the top without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.nodes.last()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.nodes.len() == self.capacity
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Top first: `c --> b --> a`.
impl<T: std::fmt::Display> std::fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (at, value) in self.nodes.iter().rev().enumerate() {
            if at > 0 {
                write!(f, " --> ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
