mod event;
mod sink;

pub use event::{
    Event, PayloadSpectrumComputed, PayloadTopologyRebuilt, PayloadVertexDragEnd,
    PayloadVertexDragStart, PayloadVertexLock, PayloadVertexMove,
};

pub use sink::EventSink;
