use std::sync::{Arc, Mutex};

use log::Level;

/// 日志出口，固定 info 级别
pub trait LogSink: Send + Sync {
    fn emit(&self, tag: &str, message: &str);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn emit(&self, tag: &str, message: &str) {
        (**self).emit(tag, message)
    }
}

/// 转发到 `log` facade；Android 上由 android_logger 写入 logcat
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacadeSink;

impl LogSink for LogFacadeSink {
    fn emit(&self, tag: &str, message: &str) {
        log::info!(target: tag, "{}", message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub tag: String,
    pub level: Level,
    pub message: String,
}

/// 内存捕获，用于测试和宿主侧检查
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<LogLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|l| l.message.clone()).collect()
    }

    /// 取出并清空已捕获的行
    pub fn take(&self) -> Vec<LogLine> {
        std::mem::take(&mut *self.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogLine>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn emit(&self, tag: &str, message: &str) {
        self.lock().push(LogLine {
            tag: tag.to_string(),
            level: Level::Info,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_take() {
        let sink = MemorySink::new();
        sink.emit("Screenshot", "first");
        sink.emit("Screenshot", "second");

        let lines = sink.take();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].level, Level::Info);
        assert_eq!(lines[1].message, "second");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_shared_sink() {
        let sink = Arc::new(MemorySink::new());
        let handle: Box<dyn LogSink> = Box::new(Arc::clone(&sink));
        handle.emit("Tile", "via arc");
        assert_eq!(sink.messages(), vec!["via arc".to_string()]);
        assert_eq!(sink.lines()[0].tag, "Tile");
    }
}
