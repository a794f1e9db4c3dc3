use crate::prelude::*;
use crate::queue::BoundedFifo;

/// Bounded queue over a ring of slots.
///
/// `rear` wraps modulo capacity, so space freed by `dequeue` is reused
/// instead of dying behind `front`. Empty keeps both indices absent, which
/// is what stops the classic `front == rear + 1` fullness probe from
/// misfiring on a drained ring.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    front: Option<Idx>,
    rear: Option<Idx>,
    capacity: usize,
}

impl<T> CircularQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            front: None,
            rear: None,
            capacity,
        }
    }

    pub fn seeded(values: impl IntoIterator<Item = T>, capacity: usize) -> IResult<Self> {
        let mut queue = Self::new(capacity);
        for value in values {
            queue.enqueue(value)?;
        }
        Ok(queue)
    }

    pub fn enqueue(&mut self, value: T) -> IResult<()> {
        if self.is_full() {
            return Err(Error::Overflow(self.capacity));
        }
        if self.is_empty() {
            self.front = Some(0);
        }
        let rear = match self.rear {
            Some(rear) => {
                let next = (rear + 1) % self.capacity;
                if next < rear {
                    log::trace!("ring: rear wrapped to slot {}", next);
                }
                next
            }
            None => 0,
        };
        self.slots[rear] = Some(value);
        self.rear = Some(rear);
        Ok(())
    }

    pub fn dequeue(&mut self) -> IResult<T> {
        let front = self.front.ok_or(Error::Underflow)?;
        let value = self.slots[front]
            .take()
            .expect("slots between front and rear are occupied");
        if self.front == self.rear {
            self.front = None;
            self.rear = None;
        } else {
            self.front = Some((front + 1) % self.capacity);
        }
        Ok(value)
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none() && self.rear.is_none()
    }

    /// Full when `rear` has run the ring around to sit right behind
    /// `front`. A zero-capacity ring is full from birth.
    pub fn is_full(&self) -> bool {
        match (self.front, self.rear) {
            (Some(front), Some(rear)) => front == (rear + 1) % self.capacity,
            _ => self.capacity == 0,
        }
    }

    pub fn len(&self) -> usize {
        match (self.front, self.rear) {
            (Some(front), Some(rear)) => (rear + self.capacity - front) % self.capacity + 1,
            _ => 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> BoundedFifo<T> for CircularQueue<T> {
    fn enqueue(&mut self, value: T) -> IResult<()> {
        CircularQueue::enqueue(self, value)
    }

    fn dequeue(&mut self) -> IResult<T> {
        CircularQueue::dequeue(self)
    }

    fn is_empty(&self) -> bool {
        CircularQueue::is_empty(self)
    }

    fn is_full(&self) -> bool {
        CircularQueue::is_full(self)
    }

    fn len(&self) -> usize {
        CircularQueue::len(self)
    }

    fn capacity(&self) -> usize {
        CircularQueue::capacity(self)
    }
}

/// Slot-by-slot view with the live window: `[_ 6 _ 4 5] front=3 rear=1`.
impl<T: std::fmt::Display> std::fmt::Display for CircularQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (at, slot) in self.slots.iter().enumerate() {
            if at > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(value) => write!(f, "{}", value)?,
                None => write!(f, "_")?,
            }
        }
        write!(f, "]")?;
        match (self.front, self.rear) {
            (Some(front), Some(rear)) => write!(f, " front={} rear={}", front, rear),
            _ => write!(f, " empty"),
        }
    }
}
