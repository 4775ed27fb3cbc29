//! Libdesk - 图书馆借阅记账演示
//!
//! 运行一个固定的借还书场景，并把每一步产生的事件叙述到控制台。

use std::sync::Arc;

use chrono::Duration;
use tokio::sync::broadcast::{self, error::TryRecvError};

use libdesk::application::{
    AddBook, BorrowBook, CollectFine, LibraryDesk, PurchaseTickets, RegisterReader,
    RegisterStaff, ReturnBook,
};
use libdesk::config::{load_config, print_config, AppConfig};
use libdesk::domain::LibraryEvent;
use libdesk::infrastructure::{EventPublisher, ManualClock};

fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Libdesk - 图书馆借阅记账系统");
    print_config(&config);

    // 场景使用可推进的时钟，便于演示逾期罚款
    let clock = Arc::new(ManualClock::starting_now());
    let event_publisher = Arc::new(EventPublisher::new());
    let mut events = event_publisher.subscribe();

    let mut desk = LibraryDesk::new(
        config.lending_policy(),
        clock.clone(),
        event_publisher.clone(),
    );
    let json = config.log.json;

    let staff_id = desk.register_staff(RegisterStaff {
        name: "Librarian".to_string(),
        address: "1 Library Road, City".to_string(),
    })?;
    narrate(&mut events, json);

    desk.add_book(AddBook {
        staff_id,
        title: "Java Programming".to_string(),
        author: "Author A".to_string(),
        isbn: "12345".to_string(),
        copies: 3,
    })?;
    narrate(&mut events, json);

    desk.add_book(AddBook {
        staff_id,
        title: "Data Structures".to_string(),
        author: "Author B".to_string(),
        isbn: "67890".to_string(),
        copies: 2,
    })?;
    narrate(&mut events, json);

    let reader = desk.register_reader(RegisterReader {
        name: "Vineesha".to_string(),
        address: "123 Street, City".to_string(),
        initial_tickets: Some(1),
    })?;
    narrate(&mut events, json);

    desk.borrow_book(BorrowBook {
        reader_id: reader.reader_id,
        isbn: "12345".to_string(),
        loan_period_days: None,
    })?;
    narrate(&mut events, json);

    // 借书证已用完，这次借阅会被拒绝
    if let Err(e) = desk.borrow_book(BorrowBook {
        reader_id: reader.reader_id,
        isbn: "67890".to_string(),
        loan_period_days: None,
    }) {
        tracing::debug!(error = %e, "Second borrow refused as expected");
    }
    narrate(&mut events, json);

    desk.purchase_tickets(PurchaseTickets {
        reader_id: reader.reader_id,
        count: 2,
    })?;
    narrate(&mut events, json);

    desk.borrow_book(BorrowBook {
        reader_id: reader.reader_id,
        isbn: "67890".to_string(),
        loan_period_days: None,
    })?;
    narrate(&mut events, json);

    // 借期 + 3 天后归还
    clock.advance(config.lending_policy().loan_period + Duration::days(3));
    for overdue in desk.list_overdue_loans() {
        tracing::info!(
            reader = %overdue.reader_name,
            isbn = %overdue.loan.isbn,
            days_late = overdue.days_late,
            "Loan overdue"
        );
    }

    let returned = desk.return_book(ReturnBook {
        reader_id: reader.reader_id,
        isbn: "12345".to_string(),
    })?;
    narrate(&mut events, json);

    if !returned.fine.is_zero() {
        desk.collect_fine(CollectFine {
            staff_id,
            reader_id: reader.reader_id,
            amount: returned.fine.amount(),
        })?;
        narrate(&mut events, json);
    }

    tracing::info!("Scenario complete");

    Ok(())
}

/// 初始化日志，`RUST_LOG` 优先于配置中的级别
fn init_tracing(config: &AppConfig) {
    let log_filter = format!("{},libdesk={}", config.log.level, config.log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 把通道中积压的事件逐条输出
fn narrate(events: &mut broadcast::Receiver<LibraryEvent>, json: bool) {
    for event in drain_events(events) {
        println!("{}", event);
        if json {
            match serde_json::to_string(&event) {
                Ok(line) => tracing::info!(event = event.name(), payload = %line, "Library event"),
                Err(e) => tracing::warn!(error = %e, "Failed to serialize event"),
            }
        }
    }
}

/// 取出通道中积压的全部事件，落后时跳过被覆盖的部分继续读取
fn drain_events(events: &mut broadcast::Receiver<LibraryEvent>) -> Vec<LibraryEvent> {
    let mut drained = Vec::new();
    loop {
        match events.try_recv() {
            Ok(event) => drained.push(event),
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped = skipped, "Narration lagged, some events were dropped");
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
    drained
}
