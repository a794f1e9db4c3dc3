use annelid::{
    binary_search, quick_sort, BinaryTree, Branch, CircularList, CircularQueue,
    DoublyCircularList, DoublyLinkedList, LinkedList, Queue, Stack,
};

fn main() {
    env_logger::init();

    // #1. the linear queue spends its slots for good
    let mut queue = Queue::seeded(1..=5, 5).unwrap();
    for _ in 0..4 {
        queue.dequeue().unwrap();
    }
    // four slots freed up front, still no room: rear sits on the last slot
    if let Err(err) = queue.enqueue(6) {
        println!("linear queue with {} left: {}", queue.len(), err);
    }

    // #2. the ring wraps into freed slots instead
    let mut ring = CircularQueue::seeded(1..=5, 5).unwrap();
    for _ in 0..3 {
        ring.dequeue().unwrap();
    }
    for value in 6..=8 {
        ring.enqueue(value).unwrap();
    }
    println!("ring after the wrap:  {}", ring);
    print!("ring drains in order: ");
    while let Ok(value) = ring.dequeue() {
        print!("{} ", value);
    }
    println!();

    // #3. a stack reverses whatever runs through it
    let sentence = "Hello there, Stack!";
    let mut stack = Stack::seeded(sentence.chars(), sentence.len()).unwrap();
    let mut reversed = String::new();
    while let Ok(letter) = stack.pop() {
        reversed.push(letter);
    }
    println!("stack-reversed:       {}", reversed);

    // #4. the list family, reversed in place
    let mut list = LinkedList::from_values([1, 2, 3, 4]);
    list.reverse();
    println!("linked list:          {}", list);

    let mut loop_list = CircularList::from_values(["a", "b", "c"]);
    loop_list.reverse();
    println!("circular list:        {}", loop_list);

    let mut chain = DoublyLinkedList::from_values([1, 2, 3, 4]);
    chain.reverse();
    println!("doubly linked:        {}", chain);

    let mut band = DoublyCircularList::from_values(["a", "b", "c"]);
    band.reverse();
    println!("doubly circular:      {}", band);

    // #5. a small tree, shaped by hand and read back inorder
    let mut tree = BinaryTree::new(4);
    let left = tree.add(tree.root(), Branch::Left, 2).unwrap();
    let right = tree.add(tree.root(), Branch::Right, 6).unwrap();
    tree.add(left, Branch::Left, 1).unwrap();
    tree.add(left, Branch::Right, 3).unwrap();
    tree.add(right, Branch::Left, 5).unwrap();
    tree.add(right, Branch::Right, 7).unwrap();
    println!("tree inorder:         {:?}", tree.inorder());

    // #6. sort, then search
    let mut items = [7, 6, 10, 5, 9, 2, 1, 15, 7];
    quick_sort(&mut items);
    println!("quick sorted:         {:?}", items);
    println!("position of 9:        {:?}", binary_search(&items, &9));
    println!("position of 8:        {:?}", binary_search(&items, &8));
}
