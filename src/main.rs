use linked_list::{LinkedList, ListError};

fn main() -> Result<(), ListError> {
    let mut list = LinkedList::<i64>::new();
    assert!(list.is_empty());
    assert_eq!(list.get_size(), 0);
    for i in 1..=3 {
        list.push_back(i);
    }
    println!("{}", list);
    println!("list size: {}", list.get_size());

    list.push_back(4);
    list.push_front(0);
    println!("{}", list);

    let removed = list.remove_at(2)?;
    println!("removed {}: {}", removed, list);
    println!("list size: {}", list.get_size());
    println!("average: {}", list.average());

    for val in &list {
        println!("{}", val);
    }

    Ok(())
}
