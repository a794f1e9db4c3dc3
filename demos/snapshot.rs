use annelid::CircularQueue;

/// Freeze a ring mid-wrap, thaw it, and keep dequeuing where it left off.
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut ring = CircularQueue::seeded(1..=5, 5)?;
    ring.dequeue()?;
    ring.dequeue()?;
    ring.enqueue(6)?;

    let buf = bincode::serialize(&ring)?;
    println!("frozen:   {} bytes", buf.len());

    let mut thawed: CircularQueue<i32> = bincode::deserialize(&buf)?;
    println!("snapshot: {:#?}", thawed);
    println!("window:   {}", thawed);

    print!("drains:   ");
    while let Ok(value) = thawed.dequeue() {
        print!("{} ", value);
    }
    println!();

    Ok(())
}
